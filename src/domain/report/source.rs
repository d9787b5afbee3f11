//! The caller-facing result-set boundary every report variant exposes:
//! declared arguments, an ordered column schema, and a one-shot row
//! producer. The whole result always fits in a single page; there is no
//! continuation token.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::report::args::{ArgumentDef, ResolvedArgs};
use crate::errors::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    String,
    Int,
    Double,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
}

impl ColumnDef {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        ColumnDef {
            name,
            kind,
            nullable: false,
        }
    }

    pub const fn nullable(name: &'static str, kind: ColumnKind) -> Self {
        ColumnDef {
            name,
            kind,
            nullable: true,
        }
    }
}

#[async_trait]
pub trait ReportSource {
    type Row: Serialize + Send;

    fn declared_arguments(&self) -> Vec<ArgumentDef>;

    fn columns(&self) -> Vec<ColumnDef>;

    /// Produces the entire, already ordered result set for one request.
    async fn produce_rows(&self, args: &ResolvedArgs) -> Result<Vec<Self::Row>, ReportError>;
}
