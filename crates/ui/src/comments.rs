//! Comment and rating widget
//!
//! Renders the persisted log into `#comments-list` and handles submissions
//! from `.comment-form`.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{
    Acknowledgement, CommentCard, CommentsView, FeedbackBoard, FeedbackEntry, FeedbackForm,
    FeedbackLog, PageConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

use crate::dom::{on_event, set_style, Timeout};
use crate::storage::LocalStorage;

pub struct CommentsWidget {
    doc: Document,
    board: FeedbackBoard<LocalStorage>,
    list: Element,
    count: Option<Element>,
    empty: Option<Element>,
    form: Option<HtmlFormElement>,
    ack: RefCell<Option<(Element, Timeout)>>,
    ack_duration_ms: u32,
}

impl CommentsWidget {
    /// Mount onto the page and draw the stored log.
    ///
    /// Returns `None` when the page has no comment list.
    pub fn mount(doc: &Document, config: &PageConfig) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(list) = doc.get_element_by_id("comments-list") else {
            return Ok(None);
        };

        let form = doc
            .query_selector(".comment-form")?
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

        let widget = Rc::new(Self {
            doc: doc.clone(),
            board: FeedbackBoard::with_config(LocalStorage::open(), config),
            list,
            count: doc.get_element_by_id("comment-count"),
            empty: doc.query_selector(".no-comments")?,
            form,
            ack: RefCell::new(None),
            ack_duration_ms: config.ack_duration_ms,
        });

        if let Some(form) = &widget.form {
            let handler = Rc::clone(&widget);
            on_event(form, "submit", move |e: Event| handler.on_submit(&e))?;
        }

        widget.render(&widget.board.load_log());
        Ok(Some(widget))
    }

    /// Rebuild the list, count label and empty state from `log`
    pub fn render(&self, log: &FeedbackLog) {
        let view = CommentsView::from_log(log);

        if let Some(count) = &self.count {
            count.set_text_content(Some(&view.count_label));
        }

        self.list.set_inner_html("");

        if view.is_empty() {
            set_style(&self.list, "display", "none");
            if let Some(empty) = &self.empty {
                set_style(empty, "display", "block");
            }
            return;
        }

        set_style(&self.list, "display", "");
        if let Some(empty) = &self.empty {
            set_style(empty, "display", "none");
        }

        for card in &view.cards {
            if let Err(e) = self.append_card(card) {
                tracing::warn!(error = ?e, "Failed to render comment");
            }
        }
    }

    fn append_card(&self, card: &CommentCard) -> Result<(), JsValue> {
        let item = self.doc.create_element("div")?;
        item.set_class_name(CommentCard::CLASS);
        item.set_inner_html(&card.to_html());
        self.list.append_child(&item)?;
        Ok(())
    }

    fn on_submit(&self, event: &Event) {
        event.prevent_default();
        let Some(form_el) = &self.form else {
            return;
        };

        let form = match read_form(form_el) {
            Ok(form) => form,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected comment form");
                form_el.report_validity();
                return;
            }
        };

        let log = self.board.submit(form);
        self.render(&log);

        if let Some(entry) = log.newest() {
            if let Err(e) = self.acknowledge(form_el, entry) {
                tracing::warn!(error = ?e, "Failed to show acknowledgement");
            }
        }
        form_el.reset();
    }

    /// Show the thank-you block right after the form; a newer one replaces it
    fn acknowledge(&self, form_el: &HtmlFormElement, entry: &FeedbackEntry) -> Result<(), JsValue> {
        if let Some((previous, timeout)) = self.ack.borrow_mut().take() {
            timeout.cancel();
            previous.remove();
        }

        let ack = Acknowledgement::for_entry(entry);
        let block = self.doc.create_element("div")?;
        block.set_inner_html(&ack.to_html());

        let parent = form_el.parent_node().ok_or("Comment form is detached")?;
        parent.insert_before(&block, form_el.next_sibling().as_ref())?;

        let expiring = block.clone();
        let timeout = Timeout::new(self.ack_duration_ms, move || expiring.remove())?;
        *self.ack.borrow_mut() = Some((block, timeout));
        Ok(())
    }
}

/// Pull the raw field values out of the form
fn read_form(form_el: &HtmlFormElement) -> Result<FeedbackForm, String> {
    let data = FormData::new_with_form(form_el).map_err(|e| format!("{e:?}"))?;
    let field = |name: &str| data.get(name).as_string();

    FeedbackForm::parse(
        &field("studentId").unwrap_or_default(),
        &field("rating").unwrap_or_default(),
        field("comment").as_deref(),
    )
    .map_err(|e| e.to_string())
}
