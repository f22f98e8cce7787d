//! Handlers behind the registry's actions

use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{
    editor::{prompt_count, select_target, VALUE_PROMPT},
    pager::page,
    registry::{Action, RecordKind},
    Console, CLEAR_SEQUENCE,
};
use crate::{
    error::{AppError, AppResult},
    models::{
        BookingField, BookingUpdate, CreateBooking, CreateEntry, CreateRequest, EntryField, EntryUpdate,
        RequestField, RequestUpdate,
    },
};

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Run a resolved action. `args` already has the arity the action declares.
    pub(super) async fn dispatch(&mut self, action: Action, args: &[&str]) -> AppResult<()> {
        match (action, args) {
            (Action::Add(RecordKind::Entry), [name]) => self.add_entry(name).await,
            (Action::Add(RecordKind::Booking), []) => self.add_booking().await,
            (Action::Add(RecordKind::Request), [material]) => self.add_request(material).await,
            (Action::Edit(RecordKind::Entry), [filter, attribute]) => self.edit_entry(filter, attribute).await,
            (Action::Edit(RecordKind::Booking), [filter, attribute]) => self.edit_booking(filter, attribute).await,
            (Action::Edit(RecordKind::Request), [filter, attribute]) => self.edit_request(filter, attribute).await,
            (Action::Remove(RecordKind::Entry), [filter]) => self.remove_entry(filter).await,
            (Action::Remove(RecordKind::Booking), [filter]) => self.remove_booking(filter).await,
            (Action::Remove(RecordKind::Request), [filter]) => self.remove_request(filter).await,
            (Action::View(kind), []) => self.view(kind).await,
            (Action::Commit, []) => {
                let committed = self.session.commit().await?;
                self.terminal.println(&format!("committed {committed} change(s)")).await
            }
            (Action::Clear, []) => self.terminal.write(CLEAR_SEQUENCE).await,
            (Action::Set, [key, value @ ..]) if !value.is_empty() => self.set(key, &value.join(" ")).await,
            (action, args) => Err(AppError::Internal(format!(
                "{:?} registered with an arity that does not fit {} argument(s)",
                action,
                args.len()
            ))),
        }
    }

    async fn add_entry(&mut self, name: &str) -> AppResult<()> {
        let location_text = self.terminal.prompt(" CATA <location text> ").await?;
        let location_img = self.terminal.prompt(" CATA <location image> ").await?;
        let available = prompt_count(&mut self.terminal, " CATA <available> ").await?;

        let data = CreateEntry {
            name: name.to_string(),
            location_text: location_text.trim().to_string(),
            location_img: location_img.trim().to_string(),
            available,
        };
        let entry = self.services.entries.create(&mut self.session, &data).await?;
        self.terminal
            .println(&format!("added entry {} '{}'", entry.id, entry.name))
            .await
    }

    async fn add_booking(&mut self) -> AppResult<()> {
        let material = self.terminal.prompt(" CATA <material> ").await?;
        let booked_by = self.terminal.prompt(" CATA <booked by> ").await?;
        let book_info = self.terminal.prompt(" CATA <info> ").await?;

        let data = CreateBooking {
            booked_material: material.trim().to_string(),
            booked_by: booked_by.trim().to_string(),
            book_info: book_info.trim().to_string(),
        };
        let booking = self.services.bookings.create(&mut self.session, &data).await?;
        self.terminal
            .println(&format!("added booking {} of '{}'", booking.id, booking.booked_material))
            .await
    }

    async fn add_request(&mut self, material: &str) -> AppResult<()> {
        let request_by = self.terminal.prompt(" CATA <requested by> ").await?;
        let info = self.terminal.prompt(" CATA <info> ").await?;

        let data = CreateRequest {
            material: material.to_string(),
            request_by: request_by.trim().to_string(),
            info: info.trim().to_string(),
        };
        let request = self.services.requests.create(&mut self.session, &data).await?;
        self.terminal
            .println(&format!("added request {} for '{}'", request.id, request.material))
            .await
    }

    async fn edit_entry(&mut self, filter: &str, attribute: &str) -> AppResult<()> {
        let field = EntryField::parse(attribute)
            .ok_or_else(|| AppError::Syntax(format!("edit entry <filter> <{}>", EntryField::NAMES.join("|"))))?;

        let found = self.services.entries.search(&mut self.session, filter).await;
        let Some(id) = select_target(&mut self.terminal, filter, found, self.config.max_column_width).await? else {
            return Ok(());
        };
        let entry = self.services.entries.get(&mut self.session, id).await?;

        let update = if field.is_count() {
            let value = prompt_count(&mut self.terminal, VALUE_PROMPT).await?;
            EntryUpdate::count(field, value)
        } else {
            let value = self.terminal.prompt(VALUE_PROMPT).await?;
            EntryUpdate::text(field, value.trim().to_string())
        }
        .ok_or_else(|| AppError::Internal(format!("no update for {:?}", field)))?;

        let entry = self.services.entries.update(&mut self.session, entry.id, &update).await?;
        self.terminal
            .println(&format!("updated {} of entry '{}'", attribute, entry.name))
            .await
    }

    async fn edit_booking(&mut self, filter: &str, attribute: &str) -> AppResult<()> {
        let field = BookingField::parse(attribute)
            .ok_or_else(|| AppError::Syntax(format!("edit booking <filter> <{}>", BookingField::NAMES.join("|"))))?;

        let found = self.services.bookings.search(&mut self.session, filter).await;
        let Some(id) = select_target(&mut self.terminal, filter, found, self.config.max_column_width).await? else {
            return Ok(());
        };
        let booking = self.services.bookings.get(&mut self.session, id).await?;

        let value = self.terminal.prompt(VALUE_PROMPT).await?;
        let update = BookingUpdate::new(field, value.trim().to_string());
        self.services.bookings.update(&mut self.session, booking.id, &update).await?;
        self.terminal
            .println(&format!("updated {} of booking {}", attribute, booking.id))
            .await
    }

    async fn edit_request(&mut self, filter: &str, attribute: &str) -> AppResult<()> {
        let field = RequestField::parse(attribute)
            .ok_or_else(|| AppError::Syntax(format!("edit request <filter> <{}>", RequestField::NAMES.join("|"))))?;

        let found = self.services.requests.search(&mut self.session, filter).await;
        let Some(id) = select_target(&mut self.terminal, filter, found, self.config.max_column_width).await? else {
            return Ok(());
        };
        let request = self.services.requests.get(&mut self.session, id).await?;

        let value = self.terminal.prompt(VALUE_PROMPT).await?;
        let update = RequestUpdate::new(field, value.trim().to_string());
        self.services.requests.update(&mut self.session, request.id, &update).await?;
        self.terminal
            .println(&format!("updated {} of request {}", attribute, request.id))
            .await
    }

    async fn remove_entry(&mut self, filter: &str) -> AppResult<()> {
        let found = self.services.entries.search(&mut self.session, filter).await;
        let Some(id) = select_target(&mut self.terminal, filter, found, self.config.max_column_width).await? else {
            return Ok(());
        };
        let entry = self.services.entries.get(&mut self.session, id).await?;

        let bookings = self.services.entries.remove(&mut self.session, &entry).await?;
        self.terminal
            .println(&format!("removed entry '{}' and {} booking(s)", entry.name, bookings))
            .await
    }

    async fn remove_booking(&mut self, filter: &str) -> AppResult<()> {
        let found = self.services.bookings.search(&mut self.session, filter).await;
        let Some(id) = select_target(&mut self.terminal, filter, found, self.config.max_column_width).await? else {
            return Ok(());
        };
        let booking = self.services.bookings.get(&mut self.session, id).await?;

        self.services.bookings.remove(&mut self.session, &booking).await?;
        self.terminal
            .println(&format!("removed booking {} of '{}'", booking.id, booking.booked_material))
            .await
    }

    async fn remove_request(&mut self, filter: &str) -> AppResult<()> {
        let found = self.services.requests.search(&mut self.session, filter).await;
        let Some(id) = select_target(&mut self.terminal, filter, found, self.config.max_column_width).await? else {
            return Ok(());
        };
        let request = self.services.requests.get(&mut self.session, id).await?;

        self.services.requests.remove(&mut self.session, &request).await?;
        self.terminal
            .println(&format!("removed request for '{}'", request.material))
            .await
    }

    async fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.bulletin.set(key, value).await;
        tracing::info!("Published '{}' = '{}'", key, value);
        self.terminal.println(&format!("set {key}")).await
    }

    async fn view(&mut self, kind: RecordKind) -> AppResult<()> {
        let (page_size, width) = (self.config.page_size, self.config.max_column_width);
        match kind {
            RecordKind::Entry => {
                let records = self.services.entries.list(&mut self.session).await?;
                page(&mut self.terminal, &records, page_size, width).await?;
            }
            RecordKind::Booking => {
                let records = self.services.bookings.list(&mut self.session).await?;
                page(&mut self.terminal, &records, page_size, width).await?;
            }
            RecordKind::Request => {
                let records = self.services.requests.list(&mut self.session).await?;
                page(&mut self.terminal, &records, page_size, width).await?;
            }
        }
        Ok(())
    }
}
