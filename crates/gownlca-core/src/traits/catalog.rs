use crate::errors::GownlcaResult;
use crate::models::Gown;

/// Source of gown descriptors. The production implementation talks to the
/// remote catalog service; the simulator only needs the list.
pub trait IGownCatalog: Send + Sync {
    fn list_gowns(&self) -> GownlcaResult<Vec<Gown>>;
}

impl IGownCatalog for Vec<Gown> {
    fn list_gowns(&self) -> GownlcaResult<Vec<Gown>> {
        Ok(self.clone())
    }
}
