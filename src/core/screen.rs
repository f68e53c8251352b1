//! Generic CRUD screen: list, search, dialog state and writes for one resource.
//!
//! The server is the only source of truth. A screen never patches its list
//! locally; every successful write is followed by a full refetch, and failed
//! requests are logged and otherwise leave the state as it was.

use crate::{
    api::{Backend, RelatedList, Resource},
    core::search::{self, Searchable},
    entities::{Department, Employee, ShiftType},
    errors::Result,
};
use tracing::{error, info, warn};

/// Result of a create, update or delete as seen by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The API accepted the write and the list was refetched.
    Applied,
    /// The request failed or was rejected; the list was left unchanged.
    Failed,
}

/// State and actions of one resource screen.
///
/// `L` is a list fetched together with the screen's own list, such as the
/// departments shown next to employees.
#[derive(Debug)]
pub struct ResourceScreen<'b, R: Resource, B: Backend, L: RelatedList = ()> {
    backend: &'b B,
    items: Vec<R>,
    related: L,
    loading: bool,
    search_query: String,
    selected: Option<R>,
    show_dialog: bool,
    close_dialog_on_delete: bool,
}

/// Employees, with departments for the department column.
pub type EmployeeScreen<'b, B> = ResourceScreen<'b, Employee, B, Vec<Department>>;
pub type DepartmentScreen<'b, B> = ResourceScreen<'b, Department, B>;
pub type ShiftTypeScreen<'b, B> = ResourceScreen<'b, ShiftType, B>;

impl<'b, R: Resource, B: Backend, L: RelatedList> ResourceScreen<'b, R, B, L> {
    /// An empty screen in the loading state. Call [`Self::refresh`] to populate it.
    #[must_use]
    pub fn new(backend: &'b B) -> Self {
        Self {
            backend,
            items: Vec::new(),
            related: L::default(),
            loading: true,
            search_query: String::new(),
            selected: None,
            show_dialog: false,
            close_dialog_on_delete: false,
        }
    }

    /// Also close the dialog and clear the selection after a successful delete,
    /// for screens that offer delete from inside the edit dialog.
    #[must_use]
    pub fn closing_dialog_on_delete(mut self) -> Self {
        self.close_dialog_on_delete = true;
        self
    }

    /// Fetches the list and the related list together. Either failing leaves both
    /// untouched. Returns whether new data was stored.
    pub async fn refresh(&mut self) -> bool {
        let fetched = tokio::try_join!(self.backend.list::<R>(), L::fetch(self.backend));
        self.loading = false;
        match fetched {
            Ok((items, related)) => {
                self.items = items;
                self.related = related;
                true
            }
            Err(e) => {
                error!("Failed to load {}: {}", R::KIND, e);
                false
            }
        }
    }

    /// `true` until the first refresh has settled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Full list as last fetched.
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[must_use]
    pub const fn related(&self) -> &L {
        &self.related
    }

    /// Record with `id` in the last fetched list.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Opens the dialog in create mode.
    pub fn open_create(&mut self) {
        self.selected = None;
        self.show_dialog = true;
    }

    /// Opens the dialog in edit mode for `item`.
    pub fn open_edit(&mut self, item: R) {
        self.selected = Some(item);
        self.show_dialog = true;
    }

    pub fn close_dialog(&mut self) {
        self.show_dialog = false;
        self.selected = None;
    }

    /// Record being edited; `None` means the dialog creates.
    #[must_use]
    pub const fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        self.show_dialog
    }

    /// Updates the selected record, or creates one when nothing is selected, then
    /// refetches on success. The dialog closes whatever the outcome.
    pub async fn submit(&mut self, payload: R::Payload) -> WriteOutcome {
        let result = match self.selected.as_ref().map(Resource::id) {
            Some(id) => self.backend.update::<R>(id, &payload).await,
            None => self.backend.create::<R>(&payload).await,
        };
        let outcome = self.after_write(result, "save").await;
        self.close_dialog();
        outcome
    }

    /// Deletes `item`, refetching on success.
    pub async fn delete(&mut self, item: &R) -> WriteOutcome {
        let result = self.backend.delete::<R>(item.id()).await;
        let outcome = self.after_write(result, "delete").await;
        if outcome == WriteOutcome::Applied && self.close_dialog_on_delete {
            self.close_dialog();
        }
        outcome
    }

    async fn after_write(&mut self, result: Result<()>, action: &str) -> WriteOutcome {
        match result {
            Ok(()) => {
                info!("{} {} succeeded", action, R::KIND.singular());
                self.refresh().await;
                WriteOutcome::Applied
            }
            Err(e) => {
                warn!("Failed to {} {}: {}", action, R::KIND.singular(), e);
                WriteOutcome::Failed
            }
        }
    }
}

impl<R: Resource + Searchable, B: Backend, L: RelatedList> ResourceScreen<'_, R, B, L> {
    /// Items matching the current search query, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        search::filter(&self.items, &self.search_query)
    }
}
