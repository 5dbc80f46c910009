//! Timer-driven text effects: the hero typewriter and the fake terminal.

use crate::constants::{
    TERMINAL_BODY_ID, TERMINAL_COMMAND_SELECTOR, TERMINAL_LINE_CLASS, TERMINAL_OUTPUT_CLASS,
    TERMINAL_PROMPT_HTML, TERMINAL_RESET_HTML, TYPED_TEXT_ID,
};
use crate::core::constants::{TERMINAL_START_DELAY_MS, TYPE_START_DELAY_MS};
use crate::core::{TerminalAction, TerminalScript, Typewriter};
use crate::dom::{self, js_err};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub fn init_typing(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(TYPED_TEXT_ID) else {
        log::debug!("[typing] no #{TYPED_TEXT_ID}; skipping");
        return Ok(());
    };
    dom::set_timeout(TYPE_START_DELAY_MS, move || {
        type_tick(el, Typewriter::default())
    })?;
    Ok(())
}

fn type_tick(el: web::Element, mut writer: Typewriter) {
    let step = writer.tick();
    el.set_text_content(Some(&step.text));
    if let Err(e) = dom::set_timeout(step.delay_ms, move || type_tick(el, writer)) {
        log::error!("[typing] timer failed: {:?}", e);
    }
}

struct Terminal {
    document: web::Document,
    body: web::Element,
    script: TerminalScript,
    rng: StdRng,
}

impl Terminal {
    fn apply(&self, action: TerminalAction) -> anyhow::Result<()> {
        match action {
            TerminalAction::TypeChar(c) => {
                if let Ok(Some(cmd)) = self.body.query_selector(TERMINAL_COMMAND_SELECTOR) {
                    let mut text = cmd.text_content().unwrap_or_default();
                    text.push(c);
                    cmd.set_text_content(Some(&text));
                }
            }
            TerminalAction::OutputLine(html) => {
                let line = self.document.create_element("div").map_err(js_err)?;
                line.set_class_name(TERMINAL_OUTPUT_CLASS);
                line.set_inner_html(html);
                self.body.append_child(&line).map_err(js_err)?;
            }
            TerminalAction::NewPrompt => {
                let line = self.document.create_element("div").map_err(js_err)?;
                line.set_class_name(TERMINAL_LINE_CLASS);
                line.set_inner_html(TERMINAL_PROMPT_HTML);
                self.body.append_child(&line).map_err(js_err)?;
            }
            TerminalAction::Clear => self.body.set_inner_html(TERMINAL_RESET_HTML),
            TerminalAction::Pause => {}
        }
        Ok(())
    }
}

pub fn init_terminal(document: &web::Document) -> anyhow::Result<()> {
    let Some(body) = document.get_element_by_id(TERMINAL_BODY_ID) else {
        log::debug!("[terminal] no #{TERMINAL_BODY_ID}; skipping");
        return Ok(());
    };
    let term = Terminal {
        document: document.clone(),
        body,
        script: TerminalScript::default(),
        rng: StdRng::from_entropy(),
    };
    dom::set_timeout(TERMINAL_START_DELAY_MS, move || terminal_tick(term))?;
    Ok(())
}

fn terminal_tick(mut term: Terminal) {
    let Some(step) = term.script.next_step(&mut term.rng) else {
        return;
    };
    if let Err(e) = term.apply(step.action) {
        log::error!("[terminal] {:?}", e);
        return;
    }
    if let Err(e) = dom::set_timeout(step.delay_ms, move || terminal_tick(term)) {
        log::error!("[terminal] timer failed: {:?}", e);
    }
}
