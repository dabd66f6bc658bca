mod chrome;
mod pages;
mod style;

use assistant_core::{AppViewModel, Page};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn draw(f: &mut Frame, view: &AppViewModel, shell: &ShellState) {
    match view.page {
        Page::Landing => {
            let area = f.area();
            pages::landing::render(f, area);
        }
        page => {
            let content = chrome::draw(f, view, shell);
            match page {
                Page::MainApp => pages::main_app::render(f, content, view, shell),
                Page::Dashboard => pages::dashboard::render(f, content),
                Page::Reports => pages::reports::render(f, content),
                Page::Billing => pages::billing::render(f, content),
                Page::Profile => pages::profile::render(f, content),
                // Landing is handled above; NotFound is the only remainder.
                _ => pages::not_found::render(f, content),
            }
        }
    }
}
