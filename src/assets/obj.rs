//! Wavefront OBJ parser
//!
//! Reads `v`, `vt`, `vn` and `f` records into an unindexed triangle list.
//! Faces with more than three corners are fan triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::renderer::Vertex;

const DEFAULT_UV: [f32; 2] = [0.0, 0.0];
const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("mesh has no faces")]
    Empty,
}

fn parse_error(line: usize, message: impl Into<String>) -> ObjError {
    ObjError::Parse {
        line,
        message: message.into(),
    }
}

/// A parsed mesh, three vertices per triangle
#[derive(Debug, Clone, Default)]
pub struct ObjMesh {
    pub vertices: Vec<Vertex>,
}

impl ObjMesh {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Load and parse an OBJ file
pub fn load_obj(path: impl AsRef<Path>) -> Result<ObjMesh, ObjError> {
    let file = File::open(path)?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ text
pub fn parse_obj<R: BufRead>(reader: R) -> Result<ObjMesh, ObjError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut vertices = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match keyword {
            "v" => positions.push(parse_floats::<3>(&args, line_no)?),
            "vt" => uvs.push(parse_floats::<2>(&args, line_no)?),
            "vn" => normals.push(parse_floats::<3>(&args, line_no)?),
            "f" => {
                if args.len() < 3 {
                    return Err(parse_error(line_no, "face needs at least three corners"));
                }
                let corners = args
                    .iter()
                    .map(|corner| {
                        resolve_corner(corner, &positions, &uvs, &normals, line_no)
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                for k in 1..corners.len() - 1 {
                    vertices.push(corners[0]);
                    vertices.push(corners[k]);
                    vertices.push(corners[k + 1]);
                }
            }
            // Groups, materials, smoothing
            _ => {}
        }
    }

    if vertices.is_empty() {
        return Err(ObjError::Empty);
    }

    Ok(ObjMesh { vertices })
}

fn parse_floats<const N: usize>(args: &[&str], line: usize) -> Result<[f32; N], ObjError> {
    if args.len() < N {
        return Err(parse_error(
            line,
            format!("expected {} components, found {}", N, args.len()),
        ));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| parse_error(line, format!("invalid number '{}'", arg)))?;
    }
    Ok(out)
}

/// Parse a 1-based index and look it up
fn lookup<T: Copy>(raw: &str, pool: &[T], what: &str, line: usize) -> Result<T, ObjError> {
    let index: usize = raw
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {} index '{}'", what, raw)))?;
    if index == 0 {
        return Err(parse_error(line, format!("{} index 0 (indices are 1-based)", what)));
    }
    pool.get(index - 1)
        .copied()
        .ok_or_else(|| parse_error(line, format!("{} index {} out of range", what, index)))
}

/// `v`, `v/vt`, `v//vn` or `v/vt/vn`
fn resolve_corner(
    corner: &str,
    positions: &[[f32; 3]],
    uvs: &[[f32; 2]],
    normals: &[[f32; 3]],
    line: usize,
) -> Result<Vertex, ObjError> {
    let mut fields = corner.split('/');
    let position = lookup(fields.next().unwrap_or(""), positions, "position", line)?;
    let uv = match fields.next() {
        Some(raw) if !raw.is_empty() => lookup(raw, uvs, "uv", line)?,
        _ => DEFAULT_UV,
    };
    let normal = match fields.next() {
        Some(raw) if !raw.is_empty() => lookup(raw, normals, "normal", line)?,
        _ => DEFAULT_NORMAL,
    };
    Ok(Vertex::new(position, normal, uv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUAD: &str = "\
# a unit quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
o quad
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    fn parse(text: &str) -> Result<ObjMesh, ObjError> {
        parse_obj(Cursor::new(text))
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let mesh = parse(QUAD).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        let v = &mesh.vertices;
        assert_eq!(v[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(v[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(v[2].position, [1.0, 1.0, 0.0]);
        assert_eq!(v[3].position, [0.0, 0.0, 0.0]);
        assert_eq!(v[5].position, [0.0, 1.0, 0.0]);
        assert_eq!(v[2].uv, [1.0, 1.0]);
        assert!(v.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_missing_uv_and_normal_use_defaults() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 1 0 0\nf 1 2//1 3\n").unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertices[0].uv, DEFAULT_UV);
        assert_eq!(mesh.vertices[0].normal, DEFAULT_NORMAL);
        assert_eq!(mesh.vertices[1].normal, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_index_reports_line() {
        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        match err {
            ObjError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("out of range"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_bad_number_rejected() {
        let err = parse("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_degenerate_face_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_no_faces_is_empty() {
        assert!(matches!(parse("v 0 0 0\n"), Err(ObjError::Empty)));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_obj("/nonexistent/model.obj"),
            Err(ObjError::Io(_))
        ));
    }
}
