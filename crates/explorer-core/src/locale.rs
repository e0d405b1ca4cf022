use serde::{Deserialize, Serialize};

/// Language used for user-facing messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Message shown when the identifier field is submitted empty
    pub fn empty_input(self) -> &'static str {
        match self {
            Locale::En => "Enter a repository",
            Locale::PtBr => "Digite o repositório",
        }
    }

    /// Message shown when the repository could not be fetched
    pub fn fetch_failed(self) -> &'static str {
        match self {
            Locale::En => "Invalid repository",
            Locale::PtBr => "repositório inválido",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Locale::En => "Explore GitHub repositories",
            Locale::PtBr => "Explore repositórios no Github",
        }
    }

    pub fn stars(self) -> &'static str {
        "Stars"
    }

    pub fn forks(self) -> &'static str {
        "Forks"
    }

    pub fn open_issues(self) -> &'static str {
        match self {
            Locale::En => "Open issues",
            Locale::PtBr => "Issues abertas",
        }
    }

    pub fn back(self) -> &'static str {
        match self {
            Locale::En => "Back",
            Locale::PtBr => "Voltar",
        }
    }
}
