//! Inventory screen controller

use std::sync::Arc;

use autoims_client::{ClientError, HttpClient};
use shared::models::{
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, StockUpdate, UsePartRequest,
};
use validator::Validate;

use crate::guard::{Guarded, SessionGuard};
use crate::views::{ListState, Notice, PopupState};

/// View state of the parts inventory screen
pub struct InventoryView {
    http: HttpClient,
    guard: Arc<SessionGuard>,
    pub list: ListState<InventoryItem>,
    pub popup: PopupState<InventoryItem>,
    pub notice: Notice,
    pub search_term: String,
}

impl InventoryView {
    pub fn new(http: HttpClient, guard: Arc<SessionGuard>) -> Self {
        Self {
            http,
            guard,
            list: ListState::new(),
            popup: PopupState::default(),
            notice: Notice::new(),
            search_term: String::new(),
        }
    }

    pub async fn load(&mut self) {
        let Some(client) = self.guard.authorized(&self.http) else {
            return;
        };
        let generation = self.list.begin_fetch();
        match self.guard.absorb(client.list_inventory().await) {
            Guarded::Ok(items) => {
                self.list.finish_fetch(generation, Ok(items));
            }
            Guarded::RedirectedToLogin => {}
            Guarded::Failed(error) => {
                self.list.finish_fetch(generation, Err(error.to_string()));
            }
        }
    }

    /// Items whose name or code contains the search term, case-insensitive
    pub fn filtered(&self) -> Vec<&InventoryItem> {
        self.list
            .items()
            .iter()
            .filter(|item| self.search_term.is_empty() || item.matches(&self.search_term))
            .collect()
    }

    pub fn open_add(&mut self) {
        self.popup.open_add();
    }

    /// The use/edit/delete chooser for one item
    pub fn open_choice(&mut self, id: i64) {
        if let Some(item) = self.list.get(id) {
            self.popup.open_choice(item.clone());
        }
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(item) = self.list.get(id) {
            self.popup.open_edit(item.clone());
        }
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    pub async fn submit_add(&mut self, payload: InventoryItemCreate) -> bool {
        if let Err(errors) = payload.validate() {
            self.notice.error(ClientError::from(errors).to_string());
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.create_inventory_item(&payload).await) {
            Guarded::Ok(created) => {
                self.list.append(created);
                self.popup.close();
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    pub async fn submit_edit(&mut self, id: i64, payload: InventoryItemUpdate) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self
            .guard
            .absorb(client.update_inventory_item(id, &payload).await)
        {
            Guarded::Ok(updated) => {
                self.list.replace(updated);
                self.popup.close();
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    /// Correct the stock count to an absolute value
    pub async fn set_stock(&mut self, id: i64, quantity_in_stock: i64) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        let payload = StockUpdate { quantity_in_stock };
        match self
            .guard
            .absorb(client.update_inventory_stock(id, &payload).await)
        {
            Guarded::Ok(updated) => {
                self.list.replace(updated);
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    /// The "use part" mutation: the backend decrements stock and attaches
    /// the cost to the job's eventual bill; the cached quantity snaps to the
    /// server-returned value.
    pub async fn submit_use_part(&mut self, request: UsePartRequest) -> bool {
        if let Err(errors) = request.validate() {
            self.notice.error(ClientError::from(errors).to_string());
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.use_part_for_vehicle(&request).await) {
            Guarded::Ok(updated) => {
                self.list.replace(updated);
                self.popup.close();
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    /// Attach an image to an item (multipart upload)
    pub async fn upload_image(&mut self, id: i64, filename: &str, bytes: Vec<u8>) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self
            .guard
            .absorb(client.upload_inventory_image(id, filename, bytes).await)
        {
            Guarded::Ok(updated) => {
                self.list.replace(updated);
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    pub async fn delete(&mut self, id: i64, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.delete_inventory_item(id).await) {
            Guarded::Ok(()) => {
                self.list.remove(id);
                self.popup.close();
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }
}
