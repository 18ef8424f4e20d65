//! API usage snippets and copy feedback
//!
//! The usage section shows ready-to-paste commands for the configured server.
//! Each block can be copied; a copied block shows a "copied" marker until its
//! feedback window expires.

use portal_client::endpoints;

/// One copyable code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Stable identifier used by copy messages
    pub id: &'static str,
    pub title: &'static str,
    pub text: String,
}

impl CodeBlock {
    /// Text placed on the clipboard
    pub fn copy_text(&self) -> &str {
        self.text.trim()
    }
}

/// Marker for the block whose copy button currently shows "copied"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub block: &'static str,
    /// Generation of the copy that set this marker
    pub generation: u64,
}

/// State of the API usage section
#[derive(Debug, Clone, Default)]
pub struct UsageState {
    pub blocks: Vec<CodeBlock>,
    pub selected: usize,
    pub copied: Option<CopyFeedback>,
    generation: u64,
}

impl UsageState {
    pub fn new(base_url: &str) -> Self {
        Self {
            blocks: snippets(base_url),
            ..Self::default()
        }
    }

    pub fn selected_block(&self) -> Option<&CodeBlock> {
        self.blocks.get(self.selected)
    }

    pub fn block(&self, id: &str) -> Option<&CodeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn select_next(&mut self) {
        if !self.blocks.is_empty() {
            self.selected = (self.selected + 1).min(self.blocks.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Allocate the generation for a new copy of any block
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Show the "copied" marker on `block`.
    ///
    /// Returns false, leaving the marker alone, when a newer copy has been
    /// issued since `generation`.
    pub fn mark_copied(&mut self, block: &'static str, generation: u64) -> bool {
        if generation < self.generation {
            return false;
        }
        self.copied = Some(CopyFeedback { block, generation });
        true
    }

    /// Clear the marker if it still belongs to the given copy.
    ///
    /// Returns false when a newer copy owns the marker.
    pub fn expire_copied(&mut self, block: &str, generation: u64) -> bool {
        match self.copied {
            Some(current) if current.block == block && current.generation == generation => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self, block: &str) -> bool {
        self.copied.is_some_and(|c| c.block == block)
    }
}

/// Build the usage snippets for a server at `base_url`
pub fn snippets(base_url: &str) -> Vec<CodeBlock> {
    let base = base_url.trim_end_matches('/');
    vec![
        CodeBlock {
            id: "curl-check",
            title: "Validate a submission",
            text: format!(
                "curl -X POST {base}{path} \\\n  -H 'Accept: application/json' \\\n  --data-urlencode \"content@submission.json\"",
                path = endpoints::CHECK_SUBMISSION_UI,
            ),
        },
        CodeBlock {
            id: "curl-submit",
            title: "Submit",
            text: format!(
                "curl -X POST {base}{path} \\\n  -H 'Accept: application/json' \\\n  --data-urlencode \"content@submission.json\"",
                path = endpoints::SUBMIT_UI,
            ),
        },
        CodeBlock {
            id: "curl-list",
            title: "List submissions",
            text: format!(
                "curl {base}{path} -H 'Accept: application/json'",
                path = endpoints::SUBMISSIONS,
            ),
        },
        CodeBlock {
            id: "python-upload",
            title: "Upload a JSON file (Python)",
            text: format!(
                r#"
import requests

url = "{base}{path}"
headers = {{"accept": "application/json"}}
with open("submission.json", "rb") as f:
    files = {{"file": ("submission.json", f, "application/json")}}
    response = requests.post(url, headers=headers, files=files)
print(response.json())
"#,
                path = endpoints::SUBMIT_FILE,
            ),
        },
    ]
}
