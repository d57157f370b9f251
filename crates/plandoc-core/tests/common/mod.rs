use std::fs;

use plandoc_core::{PlanService, PlanServiceBuilder};
use tempfile::TempDir;

/// A plan exercising headings, nested lists, every status and assignees.
pub const ROADMAP: &str = "\
# Roadmap 2025

Plans for the year. Prose like this is ignored.

## [/] Q1 @ann
- [x] Hire designer @ann
- [ ] Migrate CI @bob
  - [x] Pick provider
  - [ ] Port pipelines @bob
- [-] Mobile app

## Q2
1. [ ] Public API @carol
2. [ ] Docs site
   with search
* ~~Legacy export~~

```
- [ ] not a task, inside a fence
```
";

/// Helper function to create a service rooted in a temp dir holding
/// `roadmap.plan.md`
pub async fn create_test_service() -> (TempDir, PlanService) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("roadmap.plan.md"), ROADMAP).expect("Failed to write plan");
    let service = PlanServiceBuilder::new()
        .with_root(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create service");
    (temp_dir, service)
}
