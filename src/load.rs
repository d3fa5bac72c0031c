use anyhow::Context;
use anyhow::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

/// Reads the points at which to evaluate a distribution, one per line.
///
/// Blank lines and lines starting with `#` are skipped. At most `prefix`
/// lines are considered, if given. Files whose name ends in `.gz` are
/// decompressed on the fly.
pub fn load_points<P: AsRef<Path>>(path: P, prefix: Option<usize>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("reading {:?}", path))?;
    let reader: Box<dyn BufRead> = if path.extension().map_or(false, |ext| ext == "gz") {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    let to_take = prefix.unwrap_or(usize::MAX);
    let mut points = Vec::new();
    for (i, line) in reader.lines().take(to_take).enumerate() {
        let line = line.with_context(|| format!("reading line {} of {:?}", i + 1, path))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let x = parse_point(line).with_context(|| format!("line {} of {:?}", i + 1, path))?;
        points.push(x);
    }
    log::debug!("loaded {} points from {:?}", points.len(), path);
    Ok(points)
}

/// Parses points given as strings, for instance on the command line.
pub fn parse_points<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>> {
    values.iter().map(|v| parse_point(v.as_ref())).collect()
}

fn parse_point(s: &str) -> Result<f64> {
    fast_float::parse::<f64, _>(s.trim())
        .ok()
        .with_context(|| format!("{:?} is not a number", s))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("normdist-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_plain() {
        let path = scratch_file("plain.csv", b"0.5\n\n# comment\n-1.25\n3e2\n");
        let points = load_points(&path, None).unwrap();
        assert_eq!(points, vec![0.5, -1.25, 300.0]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_prefix() {
        let path = scratch_file("prefix.csv", b"1\n2\n3\n4\n");
        let points = load_points(&path, Some(2)).unwrap();
        assert_eq!(points, vec![1.0, 2.0]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_gzip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"1.5\n-2\n").unwrap();
        let path = scratch_file("points.csv.gz", &encoder.finish().unwrap());
        let points = load_points(&path, None).unwrap();
        assert_eq!(points, vec![1.5, -2.0]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_bad_line() {
        let path = scratch_file("bad.csv", b"1\nfoo\n");
        let err = load_points(&path, None).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_points("/definitely/not/here.csv", None).is_err());
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points(&["0", "-1.96", " 2.5 "]).unwrap(), vec![0.0, -1.96, 2.5]);
        assert!(parse_points(&["1", "x"]).is_err());
    }
}
