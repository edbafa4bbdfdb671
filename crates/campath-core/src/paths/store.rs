use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{CustomPath, NewPath, PathUpdate};
use crate::bail_invalid;
use crate::campus::Coordinates;
use crate::error::{CampathError, Result};

/// On-disk layout of the path file
#[derive(Debug, Default, Serialize, Deserialize)]
struct PathFile {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    paths: Vec<CustomPath>,
}

/// Custom path storage backed by one JSON file
#[derive(Debug)]
pub struct PathStore {
    file: PathBuf,
    data: PathFile,
}

impl PathStore {
    /// Open the store at `file`; a missing file is an empty store
    #[tracing::instrument(fields(file = %file.display()))]
    pub fn open(file: &Path) -> Result<Self> {
        let data = if file.exists() {
            let content = fs::read_to_string(file)
                .map_err(|e| CampathError::io_operation("read path store", file.display(), e))?;
            let mut data: PathFile = serde_json::from_str(&content)?;
            // Files edited by hand may carry a stale counter
            let max_id = data.paths.iter().map(|p| p.id).max().unwrap_or(0);
            data.next_id = data.next_id.max(max_id + 1);
            data
        } else {
            PathFile {
                next_id: 1,
                paths: Vec::new(),
            }
        };

        tracing::debug!(paths = data.paths.len(), "path_store_opened");
        Ok(Self {
            file: file.to_path_buf(),
            data,
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Saved paths in insertion order
    pub fn list(&self) -> &[CustomPath] {
        &self.data.paths
    }

    pub fn get(&self, name: &str) -> Result<&CustomPath> {
        let index = self.position(name)?;
        Ok(&self.data.paths[index])
    }

    /// Index of the path named `name`; surrounding whitespace is ignored
    /// as it is when saving
    fn position(&self, name: &str) -> Result<usize> {
        let name = name.trim();
        self.data
            .paths
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| CampathError::not_found("custom path", name))
    }

    /// Save a path. Saving over an existing name replaces its contents but
    /// keeps its id and creation time.
    pub fn save(&mut self, new: NewPath) -> Result<CustomPath> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            bail_invalid!("path name", "(empty)");
        }
        validate_coordinates(&new.coordinates)?;

        let now = Utc::now();
        let saved = match self.data.paths.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                existing.coordinate_count = new.coordinates.len();
                existing.coordinates = new.coordinates;
                existing.description = new.description;
                existing.updated_at = Some(now);
                existing.clone()
            }
            None => {
                let path = CustomPath {
                    id: self.data.next_id,
                    name,
                    coordinate_count: new.coordinates.len(),
                    coordinates: new.coordinates,
                    description: new.description,
                    created_at: now,
                    updated_at: None,
                };
                self.data.next_id += 1;
                self.data.paths.push(path.clone());
                path
            }
        };

        self.persist()?;
        tracing::info!(
            name = %saved.name,
            coordinates = saved.coordinate_count,
            "custom path saved"
        );
        Ok(saved)
    }

    pub fn update(&mut self, name: &str, update: PathUpdate) -> Result<CustomPath> {
        if !update.coordinates.is_empty() {
            validate_coordinates(&update.coordinates)?;
        }

        let index = self.position(name)?;
        let path = &mut self.data.paths[index];

        if !update.coordinates.is_empty() {
            path.coordinate_count = update.coordinates.len();
            path.coordinates = update.coordinates;
        }
        if let Some(description) = update.description {
            path.description = description;
        }
        path.updated_at = Some(Utc::now());
        let updated = path.clone();

        self.persist()?;
        tracing::info!(name = %updated.name, "custom path updated");
        Ok(updated)
    }

    /// Remove a path, returning what was removed
    pub fn delete(&mut self, name: &str) -> Result<CustomPath> {
        let index = self.position(name)?;
        let removed = self.data.paths.remove(index);

        self.persist()?;
        tracing::info!(name = %removed.name, "custom path deleted");
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                CampathError::io_operation("create path store directory", dir.display(), e)
            })?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.file, content)
            .map_err(|e| CampathError::io_operation("write path store", self.file.display(), e))
    }
}

fn validate_coordinates(coordinates: &[Coordinates]) -> Result<()> {
    if coordinates.is_empty() {
        bail_invalid!("path coordinates", "(none given)");
    }
    if let Some(bad) = coordinates.iter().find(|c| !c.is_valid()) {
        bail_invalid!("path coordinates", bad);
    }
    Ok(())
}
