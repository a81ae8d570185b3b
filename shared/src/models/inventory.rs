//! Inventory (parts) Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inventory item entity
///
/// The authoritative stock count lives server-side; the client only reflects
/// the last value the backend returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub brand: String,
    pub unit_price: Decimal,
    pub quantity_in_stock: i64,
    /// Unit of measure shown next to the quantity (pcs, sets, ...)
    pub quantity_label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Stock at or below this level counts as low stock
    #[serde(default)]
    pub reorder_level: i64,
}

impl InventoryItem {
    /// Case-insensitive substring match over name or code.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.code.to_lowercase().contains(&term)
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryItemCreate {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    pub unit_price: Decimal,
    pub quantity_in_stock: i64,
    #[validate(length(min = 1, message = "quantity label is required"))]
    pub quantity_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
}

/// Update inventory item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_in_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
}

/// Absolute stock correction (`PUT /api/inventory/:id/stock`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUpdate {
    pub quantity_in_stock: i64,
}

/// "Use part" flow: consume a quantity of a part against a vehicle/customer
/// job. The backend decrements stock and attaches the cost to the job's
/// eventual bill.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UsePartRequest {
    pub part_id: i64,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i64,
    pub vehicle_id: i64,
    pub customer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, code: &str) -> InventoryItem {
        InventoryItem {
            id: 1,
            code: code.into(),
            name: name.into(),
            brand: "BrakeMaster".into(),
            unit_price: Decimal::new(3500, 0),
            quantity_in_stock: 3,
            quantity_label: "sets".into(),
            description: None,
            image_url: None,
            reorder_level: 5,
        }
    }

    #[test]
    fn search_matches_name_or_code_case_insensitive() {
        assert!(item("Brake Pads", "BRK-01").matches("brake"));
        assert!(item("Oil Filter", "XBRAKE7").matches("brake"));
        assert!(item("BRAKE FLUID", "FL-02").matches("Brake"));
        assert!(!item("Oil Filter", "OF-10").matches("brake"));
    }
}
