/// Catalog identifier shared by products, stock records and cart line-items.
pub type ProductId = u64;

/// Quantity of a product. Signed so that invalid UI input (zero or negative)
/// can be represented and rejected instead of failing deserialization.
pub type Amount = i64;
