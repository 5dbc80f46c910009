use crate::constants::{ACTIVE_CLASS, HAMBURGER_ID, MOBILE_LINK_SELECTOR, MOBILE_MENU_ID};
use crate::core::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct MenuParts {
    hamburger: web::Element,
    menu: web::Element,
    body: Option<web::HtmlElement>,
    state: MenuState,
}

impl MenuParts {
    fn apply(&self) {
        let open = self.state.is_open();
        dom::set_class(&self.hamburger, ACTIVE_CLASS, open);
        dom::set_class(&self.menu, ACTIVE_CLASS, open);
        if let Some(body) = &self.body {
            _ = body
                .style()
                .set_property("overflow", self.state.body_overflow());
        }
    }
}

pub fn wire_mobile_menu(document: &web::Document) -> anyhow::Result<()> {
    let (Some(hamburger), Some(menu)) = (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(MOBILE_MENU_ID),
    ) else {
        log::debug!(
            "[menu] #{HAMBURGER_ID} or #{MOBILE_MENU_ID} missing; skipping"
        );
        return Ok(());
    };
    let parts = Rc::new(RefCell::new(MenuParts {
        hamburger: hamburger.clone(),
        menu,
        body: document.body(),
        state: MenuState::default(),
    }));

    let parts_toggle = parts.clone();
    dom::listen(&hamburger, "click", move |_: web::Event| {
        let mut p = parts_toggle.borrow_mut();
        p.state.toggle();
        p.apply();
    })?;

    for link in dom::query_all(document, MOBILE_LINK_SELECTOR) {
        let parts_close = parts.clone();
        dom::listen(&link, "click", move |_: web::Event| {
            let mut p = parts_close.borrow_mut();
            p.state.close();
            p.apply();
        })?;
    }
    Ok(())
}
