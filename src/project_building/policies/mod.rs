mod field_derivation;

pub use field_derivation::FieldDerivation;
