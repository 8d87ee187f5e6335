//! Relay-style compiler passes for GraphQL documents.
//!
//! This crate provides the pieces of a Relay-style compiler that sit between
//! a validated document set and the generated artifacts on disk:
//!
//! * [`ir`]: the intermediate representation of fragments and operations.
//! * [`ir_transformer`]: a generic traversal framework used to write
//!   compiler passes over the IR.
//! * [`transforms::mask_transform`]: inlines fragment spreads marked with
//!   `@relay(mask: false)` and hoists their argument definitions.
//! * [`codegen`]: writes generated artifacts idempotently, skipping files
//!   whose embedded content hash is already current.

pub mod canonical_json;
pub mod codegen;
mod compiler_context;
pub mod ir;
pub mod ir_transformer;
pub mod transforms;

pub use compiler_context::CompilerContext;
pub use compiler_context::CompilerContextError;

#[cfg(test)]
mod tests;
