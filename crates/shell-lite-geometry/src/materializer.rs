// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Materializer seam - turns a [`ShellPlan`] into persistent host elements
//!
//! The host implements [`Materializer`]; [`materialize`] drives it through a
//! single transaction so that a plan is either created in full or not at all.

use crate::builder::ShellPlan;
use crate::error::{Error, Result};
use crate::openings::OpeningSpec;
use crate::roof::RoofProfile;
use crate::walls::{WallRef, WallSpec};

/// Transaction name handed to the host
pub const TRANSACTION_NAME: &str = "Create building shell";

/// Failure reported by a host materializer
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct MaterializeError(pub String);

impl MaterializeError {
    pub fn new(msg: impl Into<String>) -> Self {
        MaterializeError(msg.into())
    }
}

/// Host side of element creation
///
/// Calls arrive in this order: `begin`, `create_wall` × 4,
/// `create_opening` × n, `create_roof`, then `commit`. After any error
/// only `rollback` is called.
pub trait Materializer {
    /// Host handle of a created wall, passed back when hosting openings
    type WallHandle;

    /// Open a transactional scope
    fn begin(&mut self, name: &str) -> std::result::Result<(), MaterializeError>;

    /// Create a wall and apply its top-level constraint
    fn create_wall(
        &mut self,
        wall: &WallSpec,
    ) -> std::result::Result<Self::WallHandle, MaterializeError>;

    /// Create a door/window in `host` and apply its sill height
    fn create_opening(
        &mut self,
        opening: &OpeningSpec,
        host: &Self::WallHandle,
    ) -> std::result::Result<(), MaterializeError>;

    /// Create the extrusion roof and apply its edge parameters
    fn create_roof(&mut self, roof: &RoofProfile) -> std::result::Result<(), MaterializeError>;

    /// Commit the transactional scope
    fn commit(&mut self) -> std::result::Result<(), MaterializeError>;

    /// Discard everything created since `begin`
    fn rollback(&mut self);
}

/// Counts of elements created by a committed materialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterializeReport {
    pub walls: usize,
    pub openings: usize,
    pub roofs: usize,
}

/// Create every element of `plan` inside one transaction
///
/// On failure the transaction is rolled back and `Error::Materialize` is
/// returned; the host is left as it was before the call.
pub fn materialize<M: Materializer>(
    plan: &ShellPlan,
    materializer: &mut M,
) -> Result<MaterializeReport> {
    materializer
        .begin(TRANSACTION_NAME)
        .map_err(|err| Error::materialize(err.0))?;

    match create_all(plan, materializer) {
        Ok(report) => {
            log::info!(
                "Committed {} walls, {} openings, {} roof",
                report.walls,
                report.openings,
                report.roofs
            );
            Ok(report)
        }
        Err(err) => {
            log::warn!("Rolling back '{}': {}", TRANSACTION_NAME, err);
            materializer.rollback();
            Err(Error::materialize(err.0))
        }
    }
}

fn create_all<M: Materializer>(
    plan: &ShellPlan,
    materializer: &mut M,
) -> std::result::Result<MaterializeReport, MaterializeError> {
    let mut report = MaterializeReport::default();

    let mut hosts = Vec::with_capacity(plan.walls.len());
    for wall in &plan.walls {
        hosts.push((wall.wall_ref, materializer.create_wall(wall)?));
        report.walls += 1;
    }

    for opening in &plan.openings {
        let host = find_host(&hosts, opening.wall_ref)?;
        materializer.create_opening(opening, host)?;
        report.openings += 1;
    }

    materializer.create_roof(&plan.roof)?;
    report.roofs += 1;

    materializer.commit()?;
    Ok(report)
}

fn find_host<H>(
    hosts: &[(WallRef, H)],
    wall_ref: WallRef,
) -> std::result::Result<&H, MaterializeError> {
    hosts
        .iter()
        .find(|(candidate, _)| *candidate == wall_ref)
        .map(|(_, handle)| handle)
        .ok_or_else(|| MaterializeError::new(format!("no host wall for {}", wall_ref)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ShellBuilder, ShellSnapshot};
    use crate::config::ShellConfig;
    use shell_lite_model::{
        Catalog, CatalogKey, Category, Level, LevelId, LevelSnapshot, TypeHandle, TypeId,
    };

    /// Records calls; fails on the configured step
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
        next_id: u32,
        fail_on: Option<&'static str>,
        committed: bool,
        rolled_back: bool,
    }

    impl Recorder {
        fn step(&mut self, name: &'static str) -> std::result::Result<(), MaterializeError> {
            self.log.push(name.to_string());
            if self.fail_on == Some(name) {
                return Err(MaterializeError::new(format!("{} refused", name)));
            }
            Ok(())
        }
    }

    impl Materializer for Recorder {
        type WallHandle = u32;

        fn begin(&mut self, _name: &str) -> std::result::Result<(), MaterializeError> {
            self.step("begin")
        }

        fn create_wall(&mut self, _wall: &WallSpec) -> std::result::Result<u32, MaterializeError> {
            self.step("wall")?;
            self.next_id += 1;
            Ok(self.next_id)
        }

        fn create_opening(
            &mut self,
            opening: &OpeningSpec,
            host: &u32,
        ) -> std::result::Result<(), MaterializeError> {
            assert_eq!(*host as usize, opening.wall_ref.0 + 1);
            self.step("opening")
        }

        fn create_roof(
            &mut self,
            _roof: &RoofProfile,
        ) -> std::result::Result<(), MaterializeError> {
            self.step("roof")
        }

        fn commit(&mut self) -> std::result::Result<(), MaterializeError> {
            self.step("commit")?;
            self.committed = true;
            Ok(())
        }

        fn rollback(&mut self) {
            self.rolled_back = true;
        }
    }

    fn plan() -> ShellPlan {
        let levels = LevelSnapshot::collect(vec![
            Level::new(LevelId(1), "Level 1", 0.0),
            Level::new(LevelId(2), "Level 2", 13.0),
        ]);
        let catalog = Catalog::new()
            .with(TypeHandle::new(
                TypeId(1),
                CatalogKey::new(Category::Doors, "Single-Flush", "0915 x 2134mm"),
            ))
            .with(TypeHandle::new(
                TypeId(2),
                CatalogKey::new(Category::Windows, "Fixed", "0915 x 1830mm"),
            ))
            .with(TypeHandle::new(
                TypeId(3),
                CatalogKey::new(Category::Roofs, "Basic Roof", "Generic - 400mm"),
            ));
        ShellBuilder::new(ShellConfig::default())
            .build(&ShellSnapshot::new(levels, catalog))
            .unwrap()
    }

    #[test]
    fn test_commit_sequence() {
        let mut recorder = Recorder::default();
        let report = materialize(&plan(), &mut recorder).unwrap();

        assert_eq!(
            report,
            MaterializeReport {
                walls: 4,
                openings: 4,
                roofs: 1
            }
        );
        assert_eq!(recorder.log.first().map(String::as_str), Some("begin"));
        assert_eq!(recorder.log.last().map(String::as_str), Some("commit"));
        assert_eq!(recorder.log.iter().filter(|s| *s == "wall").count(), 4);
        assert!(recorder.committed);
        assert!(!recorder.rolled_back);
    }

    #[test]
    fn test_roof_failure_rolls_back() {
        let mut recorder = Recorder {
            fail_on: Some("roof"),
            ..Recorder::default()
        };
        let err = materialize(&plan(), &mut recorder).unwrap_err();

        assert!(matches!(err, Error::Materialize(msg) if msg == "roof refused"));
        assert!(recorder.rolled_back);
        assert!(!recorder.committed);
        assert!(!recorder.log.contains(&"commit".to_string()));
    }

    #[test]
    fn test_failed_begin_skips_rollback() {
        let mut recorder = Recorder {
            fail_on: Some("begin"),
            ..Recorder::default()
        };
        assert!(materialize(&plan(), &mut recorder).is_err());
        assert_eq!(recorder.log, vec!["begin".to_string()]);
        assert!(!recorder.rolled_back);
    }

    #[test]
    fn test_missing_host_wall() {
        let mut plan = plan();
        plan.openings[0].wall_ref = WallRef(7);
        let mut recorder = Recorder::default();
        let err = materialize(&plan, &mut recorder).unwrap_err();
        assert!(matches!(err, Error::Materialize(msg) if msg.contains("wall[7]")));
        assert!(recorder.rolled_back);
    }
}
