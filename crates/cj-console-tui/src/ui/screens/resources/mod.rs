//! MCP server and environment screens

pub mod add;
pub mod list;

use crate::app::forms::{AddScreen, ResourceScreen};
use crate::app::App;

/// Which resource family a shared screen renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceView {
    Mcp,
    Env,
}

impl ResourceView {
    pub fn list_title(self) -> &'static str {
        match self {
            ResourceView::Mcp => "MCP Servers",
            ResourceView::Env => "Environments",
        }
    }

    pub fn add_title(self) -> &'static str {
        match self {
            ResourceView::Mcp => "Add MCP Server",
            ResourceView::Env => "Add Environment",
        }
    }

    pub fn screen(self, app: &App) -> &ResourceScreen {
        match self {
            ResourceView::Mcp => &app.ui.mcp,
            ResourceView::Env => &app.ui.envs,
        }
    }

    pub fn add_screen(self, app: &App) -> &AddScreen {
        match self {
            ResourceView::Mcp => &app.ui.add_mcp,
            ResourceView::Env => &app.ui.add_env,
        }
    }
}
