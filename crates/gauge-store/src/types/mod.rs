//! Enums and value types shared between records and API views.

mod data_source_access;
mod help_flags;
mod org_role;

pub use data_source_access::DataSourceAccess;
pub use help_flags::HelpFlags1;
pub use org_role::OrgRole;
