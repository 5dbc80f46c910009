use crate::constants::{CONTACT_FORM_ID, SUBMIT_BUTTON_SELECTOR};
use crate::core::{SubmitCycle, SubmitPhase};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ContactForm {
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    cycle: SubmitCycle,
}

impl ContactForm {
    fn render(&self, phase: SubmitPhase) {
        self.button
            .set_inner_html(phase.label(self.cycle.original_html()));
        _ = self
            .button
            .style()
            .set_property("background", phase.background());
        self.button.set_disabled(phase.disabled());
        if phase.resets_form() {
            self.form.reset();
        }
    }
}

/// Walk the button through its phases, one timer per phase.
fn schedule_next(state: Rc<RefCell<ContactForm>>) {
    let Some(delay_ms) = state.borrow().cycle.current_delay_ms() else {
        return;
    };
    let state_next = state.clone();
    let scheduled = dom::set_timeout(delay_ms, move || {
        let entered = {
            let mut s = state_next.borrow_mut();
            let entered = s.cycle.advance();
            if let Some(phase) = entered {
                s.render(phase);
            }
            entered
        };
        if entered.is_some() {
            schedule_next(state_next);
        }
    });
    if let Err(e) = scheduled {
        log::error!("[form] timer failed: {:?}", e);
    }
}

/// Mock submission: no request is sent, the button just plays its states.
pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[form] no #{CONTACT_FORM_ID}; skipping");
        return Ok(());
    };
    let Some(button) = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        log::debug!("[form] no submit button; skipping");
        return Ok(());
    };

    let state = Rc::new(RefCell::new(ContactForm {
        form: form.clone(),
        button,
        cycle: SubmitCycle::new(),
    }));
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        {
            let mut s = state.borrow_mut();
            let label = s.button.inner_html();
            if !s.cycle.begin(label) {
                log::debug!("[form] submit ignored; already sending");
                return;
            }
            let phase = s.cycle.phase();
            s.render(phase);
        }
        schedule_next(state.clone());
    })
}
