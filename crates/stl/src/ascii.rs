//! Parser for the ASCII STL encoding:
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending},
    combinator::{all_consuming, map},
    multi::many0,
    number::complete::float,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};
use strata_mesh::{Triangle, Vector3};

fn invalid_data<E: std::fmt::Display>(e: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}

pub(crate) fn parse(data: &[u8]) -> std::io::Result<Vec<Triangle>> {
    let text = std::str::from_utf8(data).map_err(invalid_data)?;
    match solid(text) {
        Ok((_, triangles)) => Ok(triangles),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(invalid_data(format!(
            "malformed ASCII STL ({:?}) near {:?}",
            e.code,
            e.input.chars().take(32).collect::<String>()
        ))),
        Err(nom::Err::Incomplete(_)) => Err(invalid_data("truncated ASCII STL")),
    }
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(multispace0, tag(word))
}

fn solid(input: &str) -> IResult<&str, Vec<Triangle>> {
    all_consuming(delimited(
        terminated(keyword("solid"), not_line_ending),
        many0(facet),
        terminated(
            terminated(keyword("endsolid"), not_line_ending),
            multispace0,
        ),
    ))(input)
}

fn vector(input: &str) -> IResult<&str, Vector3> {
    map(
        tuple((
            preceded(multispace1, float),
            preceded(multispace1, float),
            preceded(multispace1, float),
        )),
        |(x, y, z)| Vector3 { x, y, z },
    )(input)
}

fn vertex(input: &str) -> IResult<&str, Vector3> {
    preceded(keyword("vertex"), vector)(input)
}

fn facet(input: &str) -> IResult<&str, Triangle> {
    // The declared normal is ignored; winding order is authoritative.
    let (input, _normal) = preceded(
        tuple((keyword("facet"), multispace1, tag("normal"))),
        vector,
    )(input)?;
    let (input, _) = tuple((keyword("outer"), multispace1, tag("loop")))(input)?;
    let (input, (p0, p1, p2)) = tuple((vertex, vertex, vertex))(input)?;
    let (input, _) = tuple((keyword("endloop"), keyword("endfacet")))(input)?;
    Ok((input, Triangle { p0, p1, p2 }))
}
