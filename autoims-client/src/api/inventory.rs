//! Inventory API

use shared::models::{
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, StockUpdate, UsePartRequest,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List all inventory items
    pub async fn list_inventory(&self) -> ClientResult<Vec<InventoryItem>> {
        self.get("/api/inventory").await
    }

    /// List items at or below their reorder level
    pub async fn low_stock_inventory(&self) -> ClientResult<Vec<InventoryItem>> {
        self.get("/api/inventory/low-stock").await
    }

    /// Get one item by id
    pub async fn get_inventory_item(&self, id: i64) -> ClientResult<InventoryItem> {
        self.get(&format!("/api/inventory/{id}")).await
    }

    /// Create an item, returning the canonical server-assigned record
    pub async fn create_inventory_item(
        &self,
        payload: &InventoryItemCreate,
    ) -> ClientResult<InventoryItem> {
        self.post("/api/inventory", payload).await
    }

    /// Update an item, returning the canonical record
    pub async fn update_inventory_item(
        &self,
        id: i64,
        payload: &InventoryItemUpdate,
    ) -> ClientResult<InventoryItem> {
        self.put(&format!("/api/inventory/{id}"), payload).await
    }

    /// Correct an item's stock count
    pub async fn update_inventory_stock(
        &self,
        id: i64,
        payload: &StockUpdate,
    ) -> ClientResult<InventoryItem> {
        self.put(&format!("/api/inventory/{id}/stock"), payload).await
    }

    /// Delete an item
    pub async fn delete_inventory_item(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/inventory/{id}")).await
    }

    /// Upload an item image (the one non-JSON request in the API)
    pub async fn upload_inventory_image(
        &self,
        id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<InventoryItem> {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime.as_ref())?;
        let form = reqwest::multipart::Form::new().part("image", part);
        self.post_multipart(&format!("/api/inventory/{id}/image"), form)
            .await
    }

    /// Consume a part against a vehicle/customer job. The backend decrements
    /// stock and attaches the cost to the job's eventual bill; the returned
    /// item carries the new authoritative quantity.
    pub async fn use_part_for_vehicle(
        &self,
        request: &UsePartRequest,
    ) -> ClientResult<InventoryItem> {
        self.post("/api/job-parts/use-for-vehicle", request).await
    }
}
