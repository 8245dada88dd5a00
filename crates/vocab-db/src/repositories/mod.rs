// All repository functions are generic over `E: Executor<'e, Database = Postgres>`
// so they accept both a `&PgPool` (direct query) and a `&mut Transaction` (atomic operations).
// Inputs are expected to be trimmed and validated already; see `crate::Store`.

pub mod topic;
pub mod word;
