//! Compiler passes built on [`IrTransformer`](crate::ir_transformer::IrTransformer).

pub mod mask_transform;
mod mask_transform_error;

pub use mask_transform::RelayMaskTransform;
pub use mask_transform_error::MaskTransformError;
