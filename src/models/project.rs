use serde::Serialize;

/// A featured project card. `anchor` is the fragment on `/projects`.
#[derive(Debug, Serialize, Clone)]
pub struct Project {
    pub anchor: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tools: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        anchor: "consulting",
        title: "Independent Consulting Projects",
        summary: "Strategy & fundraising for nonprofits",
        tools: &[
            "MailChimp",
            "Google Workspace",
            "Tableau",
            "SQL",
            "Python",
            "OpenAI GPT-4 API",
            "Asana",
        ],
    },
    Project {
        anchor: "grainai",
        title: "GrainAI (Fintech for Gig Workers)",
        summary: "Strategy, product design, and user research for a personal finance platform tailored to gig workers.",
        tools: &["CursorAI", "Python", "Google Sheets API", "Lovable", "OpenAI GPT-4 API"],
    },
    Project {
        anchor: "gpt",
        title: "Custom Financial Sentiment GPT",
        summary: "Built GPT-based tool to assist with early-stage investment research and memo drafting.",
        tools: &["OpenAI GPT-4 API", "Google Sheets API"],
    },
    Project {
        anchor: "research",
        title: "Renewable Energy Research",
        summary: "Research and policy analysis on low-emission energy solutions in emerging markets.",
        tools: &["Excel", "Canva", "Google Docs"],
    },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}
