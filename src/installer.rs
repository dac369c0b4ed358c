use crate::config::Config;
use crate::constants::{ARCHIVE_EXTENSION, PLATFORM, RELEASE_CANDIDATE_SUFFIX};
use crate::errors::{FetchError, InstallError};
use crate::types::VersionSpec;
use crate::utils;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<(), FetchError>;
}

#[async_trait]
pub trait Archiver: Send + Sync {
    async fn extract(&self, archive: &Path, destination: &Path) -> io::Result<()>;
}

#[async_trait]
pub trait Remover: Send + Sync {
    /// Removing a path that does not exist succeeds.
    async fn remove(&self, path: &Path) -> io::Result<()>;
}

pub struct TarArchiver;

#[async_trait]
impl Archiver for TarArchiver {
    async fn extract(&self, archive: &Path, destination: &Path) -> io::Result<()> {
        let archive = archive.to_path_buf();
        let destination = destination.to_path_buf();

        tokio::task::spawn_blocking(move || utils::extract_tarball(&archive, &destination))
            .await
            .map_err(io::Error::other)?
    }
}

pub struct FsRemover;

#[async_trait]
impl Remover for FsRemover {
    async fn remove(&self, path: &Path) -> io::Result<()> {
        match fs::remove_dir_all(path).await {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }
}

pub struct Installer;
impl Installer {
    /// `go1.21.0.linux-amd64.tar.gz`, or `go1.21rc.linux-amd64.tar.gz` for release candidates.
    pub fn archive_name(spec: &VersionSpec) -> String {
        format!(
            "go{}.{PLATFORM}.{ARCHIVE_EXTENSION}",
            Self::download_version(spec)
        )
    }

    pub fn download_url(config: &Config, spec: &VersionSpec) -> String {
        format!("{}/{}", config.download_base, Self::archive_name(spec))
    }

    fn download_version(spec: &VersionSpec) -> String {
        if spec.is_release_candidate {
            return format!("{}{RELEASE_CANDIDATE_SUFFIX}", spec.version);
        }

        spec.version.to_string()
    }

    pub async fn install_version(
        config: &Config,
        fetcher: &dyn Fetcher,
        archiver: &dyn Archiver,
        spec: &VersionSpec,
    ) -> Result<PathBuf, InstallError> {
        let url = Self::download_url(config, spec);
        let archive = config.download_dir.join(Self::archive_name(spec));
        let version = Self::download_version(spec);

        log::info!("Downloading Go {version} from {url}");
        fetcher
            .fetch(&url, &archive)
            .await
            .map_err(|source| InstallError::Download {
                version: version.to_string(),
                source,
            })?;

        log::info!(
            "Extracting {} into {}",
            archive.display(),
            config.install_parent.display()
        );
        archiver
            .extract(&archive, &config.install_parent)
            .await
            .map_err(|source| InstallError::Extract { version, source })?;

        Ok(archive)
    }
}
