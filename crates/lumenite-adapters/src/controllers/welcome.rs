//! Built-in welcome page, served by the default route table.

use lumenite_core::{application::ports::ResponseSink, error::LumeniteResult};

use super::registry::{Action, Actions};

pub const PAGE_TITLE: &str = "Welcome to Lumenite!";
pub const HERO_TEXT: &str = "Welcome to Lumenite!";
pub const SUB_TEXT: &str =
    "A lightweight and powerful framework for building fast serverless and server-based applications.";

#[derive(Debug, Default)]
pub struct WelcomeController;

impl WelcomeController {
    pub fn index(&mut self, response: &dyn ResponseSink) -> LumeniteResult<()> {
        response.write_body(render_page().as_bytes())
    }
}

impl Actions for WelcomeController {
    const NAME: &'static str = "WelcomeController";
    const ACTIONS: &'static [(&'static str, Action<Self>)] = &[("index", Self::index)];
}

fn render_page() -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\
         <title>{PAGE_TITLE}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{HERO_TEXT}</h1>\n\
         <p>{SUB_TEXT}</p>\n\
         </body>\n\
         </html>\n"
    )
}
