//! Volume metadata in `.ini` form
//!
//! ```ini
//! [Volume]
//! Width=256
//! Height=256
//! Depth=128
//! Components=1
//! BitsPerComponent=8
//! ScaleX=1.0
//! ScaleY=1.0
//! ScaleZ=1.0
//! ```
//!
//! Only the `[Volume]` section is read, unknown keys are ignored.

use std::{fmt::Write, str::FromStr};

use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_until},
    character::complete::char,
    combinator::{map, rest},
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::VolumeLoadingError;

use super::VolumeMetadata;

const VOLUME_SECTION: &str = "Volume";

#[derive(Debug, PartialEq)]
enum IniLine<'a> {
    Section(&'a str),
    Entry(&'a str, &'a str),
}

fn section(s: &str) -> IResult<&str, IniLine> {
    map(delimited(char('['), take_until("]"), char(']')), IniLine::Section)(s)
}

fn entry(s: &str) -> IResult<&str, IniLine> {
    map(
        separated_pair(take_till1(|c: char| c == '='), char('='), rest),
        |(key, value): (&str, &str)| IniLine::Entry(key.trim(), value.trim()),
    )(s)
}

fn ini_line(s: &str) -> IResult<&str, IniLine> {
    alt((section, entry))(s)
}

fn parse_value<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T, VolumeLoadingError> {
    value
        .parse()
        .map_err(|_| VolumeLoadingError::MetadataParseError {
            line,
            reason: format!("bad value '{}' for {}", value, key),
        })
}

/// Parse metadata, result is checked with [`VolumeMetadata::is_valid`]
pub fn parse_metadata(text: &str) -> Result<VolumeMetadata, VolumeLoadingError> {
    let mut meta = VolumeMetadata::default();
    let mut in_volume = false;

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        let number = number + 1;

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        // lines that are neither section nor entry are skipped
        let parsed = match ini_line(line) {
            Ok((_, parsed)) => parsed,
            Err(_) => continue,
        };

        match parsed {
            IniLine::Section(name) => in_volume = name == VOLUME_SECTION,
            IniLine::Entry(key, value) if in_volume => match key {
                "Width" => meta.width = parse_value(number, key, value)?,
                "Height" => meta.height = parse_value(number, key, value)?,
                "Depth" => meta.depth = parse_value(number, key, value)?,
                "Components" => meta.components = parse_value(number, key, value)?,
                "BitsPerComponent" => meta.bits_per_component = parse_value(number, key, value)?,
                "ScaleX" => meta.scale.x = parse_value(number, key, value)?,
                "ScaleY" => meta.scale.y = parse_value(number, key, value)?,
                "ScaleZ" => meta.scale.z = parse_value(number, key, value)?,
                _ => (),
            },
            IniLine::Entry(..) => (),
        }
    }

    if !meta.is_valid() {
        return Err(VolumeLoadingError::InvalidMetadata);
    }
    Ok(meta)
}

/// Serialize metadata, readable by [`parse_metadata`]
pub fn metadata_to_ini(meta: &VolumeMetadata) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "[{}]", VOLUME_SECTION);
    let _ = writeln!(out, "Width={}", meta.width);
    let _ = writeln!(out, "Height={}", meta.height);
    let _ = writeln!(out, "Depth={}", meta.depth);
    let _ = writeln!(out, "Components={}", meta.components);
    let _ = writeln!(out, "BitsPerComponent={}", meta.bits_per_component);
    let _ = writeln!(out, "ScaleX={}", meta.scale.x);
    let _ = writeln!(out, "ScaleY={}", meta.scale.y);
    let _ = writeln!(out, "ScaleZ={}", meta.scale.z);
    out
}

#[cfg(test)]
mod test {
    use super::*;

    const KNEE: &str = "\
# exported by scanner
[Volume]
Width = 512
Height=512
Depth=87
BitsPerComponent=16
ScaleX=0.5
ScaleY=0.5
; ScaleZ left out
Vendor=Siemens

[Other]
Width=3
";

    #[test]
    fn line_grammar() {
        assert_eq!(ini_line("[Volume]"), Ok(("", IniLine::Section("Volume"))));
        assert_eq!(
            ini_line("Width = 12"),
            Ok(("", IniLine::Entry("Width", "12")))
        );
        assert!(ini_line("garbage").is_err());
    }

    #[test]
    fn parse_knee() {
        let meta = parse_metadata(KNEE).unwrap();
        assert_eq!(meta.width, 512);
        assert_eq!(meta.height, 512);
        assert_eq!(meta.depth, 87);
        assert_eq!(meta.components, 1);
        assert_eq!(meta.bits_per_component, 16);
        assert!((meta.scale.x - 0.5).abs() < f32::EPSILON);
        assert!((meta.scale.z - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn outside_section_ignored() {
        let res = parse_metadata("Width=4\nHeight=4\nDepth=4\n");
        assert!(matches!(res, Err(VolumeLoadingError::InvalidMetadata)));
    }

    #[test]
    fn bad_number() {
        let res = parse_metadata("[Volume]\nWidth=4\nHeight=four\n");
        match res {
            Err(VolumeLoadingError::MetadataParseError { line, .. }) => assert_eq!(line, 3),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn written_metadata_reads_back() {
        let mut meta = VolumeMetadata::new(3, 7, 9);
        meta.components = 2;
        meta.scale.y = 2.5;

        let parsed = parse_metadata(&metadata_to_ini(&meta)).unwrap();
        assert_eq!(parsed, meta);
    }
}
