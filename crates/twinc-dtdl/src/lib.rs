//! DTDL interface parsing and schema resolution for twinc.
//!
//! This crate defines the input side of the compiler: raw interface document
//! parsing (`InterfaceDoc`), discriminator-based content dispatch (`Content`,
//! `parse_content`), total schema resolution (`resolve_schema`), and the
//! fully-parsed `Interface` handed to normalization.

pub mod content;
pub mod interface;
pub mod schema;
pub mod types;

pub use content::{parse_content, Command, Content, ContentError, Property, Relationship, Telemetry};
pub use interface::{parse_interface_file, parse_interface_str, DtdlError, Interface, InterfaceDoc};
pub use schema::{resolve_schema, EnumSchema, EnumValue, Schema};
pub use types::PrimitiveType;
