use flate2::read::GzDecoder;
use std::fs::File;
use std::io;
use std::path::Path;
use tar::Archive;

pub fn extract_tarball(archive: &Path, destination: &Path) -> io::Result<()> {
    let file = File::open(archive)?;
    let gz = GzDecoder::new(io::BufReader::new(file));
    let mut archive = Archive::new(gz);
    archive.set_preserve_permissions(true);

    std::fs::create_dir_all(destination)?;
    archive.unpack(destination)
}

#[cfg(test)]
pub mod test_support {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs::File;
    use std::path::Path;

    /// Writes a gzipped tarball shaped like a Go release: `go/VERSION` and `go/bin/go`.
    pub fn write_release_archive(path: &Path, version: &str) {
        let file = File::create(path).unwrap();
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

        append_file(&mut builder, "go/VERSION", format!("go{version}\n").as_bytes(), 0o644);
        append_file(&mut builder, "go/bin/go", b"#!/bin/sh\n", 0o755);

        builder.into_inner().unwrap().finish().unwrap();
    }

    fn append_file<W: std::io::Write>(
        builder: &mut tar::Builder<W>,
        name: &str,
        contents: &[u8],
        mode: u32,
    ) {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(mode);
        header.set_cksum();
        builder.append_data(&mut header, name, contents).unwrap();
    }
}
