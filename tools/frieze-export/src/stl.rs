//! STL mesh writers (ASCII and binary)
//!
//! Both writers stream: each facet is written as it arrives and nothing is
//! buffered beyond the underlying writer.

use frieze_core::{MeshWriter, Triangle};
use serde::Deserialize;
use std::io::{self, Write};

/// Size of the binary STL header block
const BINARY_HEADER_SIZE: usize = 80;

/// Output encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    /// Plain-text `solid ... endsolid`
    #[default]
    Ascii,
    /// 80-byte header, u32 count, 50 bytes per facet
    Binary,
}

/// ASCII STL writer
pub struct AsciiStlWriter<W: Write> {
    out: W,
    name: String,
}

impl<W: Write> AsciiStlWriter<W> {
    /// `name` goes on the `solid` / `endsolid` lines
    pub fn new(out: W, name: &str) -> Self {
        Self {
            out,
            name: solid_name(name),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MeshWriter for AsciiStlWriter<W> {
    fn write_header(&mut self, _triangle_count: usize) -> io::Result<()> {
        writeln!(self.out, "solid {}", self.name)
    }

    fn write_triangle(&mut self, triangle: &Triangle) -> io::Result<()> {
        let n = triangle.normal();
        writeln!(
            self.out,
            "  facet normal {} {} {}",
            stl_float(n.x),
            stl_float(n.y),
            stl_float(n.z)
        )?;
        writeln!(self.out, "    outer loop")?;
        for v in triangle.vertices() {
            writeln!(
                self.out,
                "      vertex {} {} {}",
                stl_float(v.x),
                stl_float(v.y),
                stl_float(v.z)
            )?;
        }
        writeln!(self.out, "    endloop")?;
        writeln!(self.out, "  endfacet")
    }

    fn write_trailer(&mut self) -> io::Result<()> {
        writeln!(self.out, "endsolid {}", self.name)?;
        self.out.flush()
    }
}

/// Binary STL writer.
///
/// Layout:
/// - 80 bytes: header text, zero padded
/// - 4 bytes: u32 LE triangle count
/// - Per triangle (50 bytes): normal (3 x f32 LE), 3 vertices (9 x f32 LE),
///   u16 attribute byte count (0)
pub struct BinaryStlWriter<W: Write> {
    out: W,
    name: String,
}

impl<W: Write> BinaryStlWriter<W> {
    pub fn new(out: W, name: &str) -> Self {
        Self {
            out,
            name: solid_name(name),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MeshWriter for BinaryStlWriter<W> {
    fn write_header(&mut self, triangle_count: usize) -> io::Result<()> {
        let count = u32::try_from(triangle_count).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{triangle_count} triangles exceed the binary STL limit"),
            )
        })?;

        let mut header = [0u8; BINARY_HEADER_SIZE];
        let text = format!("frieze-export binary STL: {}", self.name);
        let text = text.as_bytes();
        let len = text.len().min(BINARY_HEADER_SIZE);
        header[..len].copy_from_slice(&text[..len]);

        self.out.write_all(&header)?;
        self.out.write_all(&count.to_le_bytes())
    }

    fn write_triangle(&mut self, triangle: &Triangle) -> io::Result<()> {
        let n = triangle.normal();
        let mut facet = [0u8; 50];
        let coords = [n, triangle.v1, triangle.v2, triangle.v3]
            .into_iter()
            .flat_map(|v| [v.x, v.y, v.z]);
        for (slot, c) in facet.chunks_exact_mut(4).zip(coords) {
            slot.copy_from_slice(&(c as f32).to_le_bytes());
        }
        // Trailing two bytes stay zero (attribute byte count)
        self.out.write_all(&facet)
    }

    fn write_trailer(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Scientific notation with 6 fractional digits and a signed, two-digit
/// exponent (`5.000000e+01`)
fn stl_float(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => format!("{mantissa}e{exp:+03}"),
            Err(_) => formatted,
        },
        // NaN and infinities have no exponent
        None => formatted,
    }
}

/// STL solid names are a single token
fn solid_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "frieze".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn unit_triangle() -> Triangle {
        Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y)
    }

    #[test]
    fn test_ascii_single_facet() {
        let mut writer = AsciiStlWriter::new(Vec::new(), "test");
        writer.write_header(1).unwrap();
        writer.write_triangle(&unit_triangle()).unwrap();
        writer.write_trailer().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "solid test");
        assert_eq!(
            lines[1],
            "  facet normal 0.000000e+00 0.000000e+00 1.000000e+00"
        );
        assert_eq!(lines[2], "    outer loop");
        assert_eq!(lines[4], "      vertex 1.000000e+00 0.000000e+00 0.000000e+00");
        assert_eq!(lines[6], "    endloop");
        assert_eq!(lines[7], "  endfacet");
        assert_eq!(lines[8], "endsolid test");
    }

    #[test]
    fn test_ascii_empty_mesh() {
        let mut writer = AsciiStlWriter::new(Vec::new(), "");
        writer.write_header(0).unwrap();
        writer.write_trailer().unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "solid frieze\nendsolid frieze\n");
    }

    #[test]
    fn test_binary_layout() {
        let mut writer = BinaryStlWriter::new(Vec::new(), "test");
        writer.write_header(2).unwrap();
        writer.write_triangle(&unit_triangle()).unwrap();
        writer.write_triangle(&unit_triangle()).unwrap();
        writer.write_trailer().unwrap();

        let data = writer.into_inner();
        // 84 header + 2 * 50
        assert_eq!(data.len(), 184);
        assert!(data.starts_with(b"frieze-export binary STL: test"));
        assert_eq!(u32::from_le_bytes([data[80], data[81], data[82], data[83]]), 2);

        // Normal z of the first facet
        let nz = f32::from_le_bytes([data[92], data[93], data[94], data[95]]);
        assert!((nz - 1.0).abs() < 1e-6);

        // Second vertex x (offset 84 + 12 normal + 12 first vertex)
        let x = f32::from_le_bytes([data[108], data[109], data[110], data[111]]);
        assert_eq!(x, 1.0);

        // Attribute byte count
        assert_eq!(&data[132..134], &[0, 0]);
    }

    #[test]
    fn test_long_name_truncated_to_header() {
        let name = "x".repeat(200);
        let mut writer = BinaryStlWriter::new(Vec::new(), &name);
        writer.write_header(0).unwrap();
        assert_eq!(writer.into_inner().len(), 84);
    }

    #[test]
    fn test_float_exponent_is_signed() {
        assert_eq!(stl_float(50.0), "5.000000e+01");
        assert_eq!(stl_float(-35.35533905932738), "-3.535534e+01");
        assert_eq!(stl_float(0.0), "0.000000e+00");
        assert_eq!(stl_float(1.5e-14), "1.500000e-14");
        assert_eq!(stl_float(2.0e120), "2.000000e+120");
    }

    #[test]
    fn test_solid_name_is_single_token() {
        assert_eq!(solid_name("my face"), "my_face");
        assert_eq!(solid_name(""), "frieze");
    }
}
