//! Long-form case study content shown in the post overlay.
//!
//! Each post's body is produced by its own builder function, looked up by
//! [`PostKey`]. A body is only constructed when a reader opens that post, and
//! every lookup builds a fresh value. Keys without a builder resolve to the
//! placeholder.

use serde::Serialize;

use super::post::PostKey;

pub const PLACEHOLDER_TEXT: &str = "(Full post content will go here.)";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: &'static str },
    Paragraph { text: &'static str },
    List { items: Vec<&'static str> },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub icon: &'static str,
    pub icon_label: &'static str,
    pub image: &'static str,
    pub topic: &'static str,
    pub dateline: Option<&'static str>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostDetail {
    Full(CaseStudy),
    Placeholder { text: &'static str },
}

impl PostDetail {
    pub fn placeholder() -> Self {
        PostDetail::Placeholder {
            text: PLACEHOLDER_TEXT,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PostDetail::Placeholder { .. })
    }
}

type Builder = fn() -> CaseStudy;

static DETAILS: [(PostKey, Builder); 5] = [
    (PostKey::Narayana, narayana),
    (PostKey::Taobao, taobao),
    (PostKey::Mpesa, mpesa),
    (PostKey::Zipline, zipline),
    (PostKey::Grameen, grameen),
];

/// Resolve a raw `?post=` value. Never fails: anything unknown gets the placeholder.
pub fn resolve(key: &str) -> PostDetail {
    match PostKey::from_slug(key) {
        Some(k) => resolve_key(k),
        None => {
            log::debug!("No post detail for key {:?}", key);
            PostDetail::placeholder()
        }
    }
}

pub fn resolve_key(key: PostKey) -> PostDetail {
    DETAILS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, build)| PostDetail::Full(build()))
        .unwrap_or_else(PostDetail::placeholder)
}

const STORY: &str = "💡 What’s the story?";
const PLAYBOOK: &str = "🛠️ Playbook Breakdown";
const LEARNINGS: &str = "🔑 Key Learnings (Aimaan’s POV)";
const ADOPTION: &str = "🌍 Adoption Potential";

fn narayana() -> CaseStudy {
    CaseStudy {
        title: "Narayana Health",
        icon: "🔷",
        icon_label: "diamond",
        image: "/static/stock/narayana-health.jpg",
        topic: "Healthcare Innovation",
        dateline: None,
        blocks: vec![
            Block::Heading { text: STORY },
            Block::Paragraph {
                text: "Founded by heart surgeon Dr. Devi Shetty, Narayana Health is a chain of Indian hospitals that delivers world-class cardiac surgeries at ultra-low costs. It's not just a hospital, it's a lesson in operational brilliance. By combining scale, process discipline, and smart pricing, they have figured out how to treat millions without breaking the system or the patient.",
            },
            Block::Heading { text: "🚀 Why it’s a standout" },
            Block::Paragraph {
                text: "Dr. Shetty basically turned surgery into a high-volume, high-efficiency service. Think of it like a life-saving assembly line, where surgeons perform more procedures, faster, and with better outcomes. The more they operate, the more affordable and effective it gets. Quality and affordability are not opposites here, they fuel each other!",
            },
            Block::Heading { text: PLAYBOOK },
            Block::List {
                items: vec![
                    "Centralized purchasing & standardized care pathways",
                    "Tiered pricing so wealthier patients help subsidize the rest",
                    "Nurses and assistants take on more frontline roles (task-shifting)",
                    "Focused on high-demand specialties like cardiac and cancer care",
                ],
            },
            Block::Heading { text: LEARNINGS },
            Block::Paragraph {
                text: "Narayana flipped how I think about cost: It's not the barrier, it's the unlock. They have shown that with smart systems thinking, you can scale affordable care without cutting corners. It made me rethink public sector constraints, not as a money problem, but as a design problem.",
            },
            Block::Heading { text: ADOPTION },
            Block::Paragraph {
                text: "This model has legs in Nigeria, Bangladesh, and even underserved parts of the U.S. Any place with young populations, high disease burdens, and weak insurance coverage. Pair it with telemedicine, and you've got a game plan for reaching the last mile.",
            },
        ],
    }
}

fn taobao() -> CaseStudy {
    CaseStudy {
        title: "Tao Bao Villages",
        icon: "🏘️",
        icon_label: "village",
        image: "/static/stock/taobao-village.jpg",
        topic: "Rural E-Commerce",
        dateline: None,
        blocks: vec![
            Block::Heading { text: STORY },
            Block::Paragraph {
                text: "Tao Bao Villages are a wild success story from rural China. With help from Alibaba, these once isolated communities turned into thriving e-commerce hubs. Villagers went from offline to online, allowing them to get access to tools, training, and storefronts to sell everything from handmade crafts to furniture across the country.",
            },
            Block::Heading { text: "🚀 Why it’s innovative" },
            Block::Paragraph {
                text: "Instead of moving people to cities for jobs, Alibaba flipped the model and brought digital jobs to the people. This wasn't philanthropy, it was platform-building! Think: digital literacy, micro-loans, logistics, and payments all working together to create economic inclusion at scale.",
            },
            Block::Heading { text: PLAYBOOK },
            Block::List {
                items: vec![
                    "Trained “e-leaders” in each village to onboard others",
                    "Built local logistics systems in hard-to-reach areas",
                    "Offered zero-interest loans and seller incentives to reduce barriers",
                    "Bundled payments, storefronts, and delivery tools into one smooth setup",
                ],
            },
            Block::Heading { text: LEARNINGS },
            Block::Paragraph {
                text: "What blew me away is how Tao Bao Villages turned digital equity into infrastructure. It is not just about giving people internet, it's about building a repeatable ecosystem that unlocks economic agency. It made me rethink inclusion as not just as a fairness issue, but as a growth strategy.",
            },
            Block::Heading { text: ADOPTION },
            Block::Paragraph {
                text: "This model feels ripe for places like rural Indonesia, Nepal, or even Indigenous communities in Canada. With the right mix of localized commerce platforms, mobile payments, and digital training, you could turn rural populations into a distributed workforce, and do it profitably.",
            },
        ],
    }
}

fn mpesa() -> CaseStudy {
    CaseStudy {
        title: "M-Pesa",
        icon: "📲",
        icon_label: "phone",
        image: "/static/stock/mpesa.jpg",
        topic: "Fintech & Financial Inclusion",
        dateline: None,
        blocks: vec![
            Block::Heading { text: STORY },
            Block::Paragraph {
                text: "M-Pesa flipped the financial system on its head in Kenya. It let people send and receive money over SMS, no bank account or internet needed. What started as a simple mobile money service is now deeply woven into Kenya's economy, powering everything from daily transactions to business loans.",
            },
            Block::Heading { text: "🚀 Why it’s innovative" },
            Block::Paragraph {
                text: "While banks were busy building branches, M-Pesa leapfrogged the entire system. It brought financial access to millions who were previously excluded, all through basic phones and SIM cards. The magic? Simplicity, trust, and distribution.",
            },
            Block::Heading { text: PLAYBOOK },
            Block::List {
                items: vec![
                    "Used telecom agents, not banks, to sign people up",
                    "Ran on SMS, so it worked on basic feature phones",
                    "Focused on high-density, cash-heavy communities",
                    "Layered in more products (savings, loans) as trust grew",
                ],
            },
            Block::Heading { text: LEARNINGS },
            Block::Paragraph {
                text: "M-Pesa made me rethink what fintech really means. It is not just about flashy apps, it's about building something people trust and actually use. They nailed product-market fit by grounding everything in local behaviors and needs.",
            },
            Block::Heading { text: ADOPTION },
            Block::Paragraph {
                text: "Places like Pakistan, Haiti, or underserved regions facing institutional gaps where formal banking is limited or mistrusted could benefit hugely. M-Pesa's model is also a powerful blueprint for building inclusive digital public infrastructure from the ground up.",
            },
        ],
    }
}

fn zipline() -> CaseStudy {
    CaseStudy {
        title: "Zipline",
        icon: "✈️",
        icon_label: "airplane",
        image: "/static/stock/zipline.jpg",
        topic: "Logistics Innovation & Public Health",
        dateline: Some("July 7th, 2025"),
        blocks: vec![
            Block::Heading { text: STORY },
            Block::Paragraph {
                text: "Zipline started in Rwanda with a big, yet simple idea: use drones to deliver life-saving medical supplies to remote areas. Think blood, vaccines, insulin, anything time-sensitive and hard to get to. Today, they’ve grown into a full-blown automated logistics network, operating in countries like Ghana, Nigeria, Kenya, and even the U.S.",
            },
            Block::Heading { text: "🚀 Why it’s a stand-out" },
            Block::Paragraph {
                text: "Zipline turned a classic bottleneck like poor infrastructure into an opportunity. Where roads were unreliable, they flew over the problem. Their drone-based system cuts delivery times from hours (or days) to under 30 minutes, saving lives in emergencies and making rural healthcare more reliable.",
            },
            Block::Heading { text: PLAYBOOK },
            Block::List {
                items: vec![
                    "Focused on high-impact, hard-to-serve use cases (e.g., rural blood banks)",
                    "Partnered directly with governments and health systems",
                    "Built end-to-end logistics hubs to handle storage, packing, and autonomous delivery",
                    "Designed ultra-efficient fixed-wing drones to handle scale and distance",
                    "Now expanding into e-commerce and home delivery with precision-drop tech",
                ],
            },
            Block::Heading { text: LEARNINGS },
            Block::Paragraph {
                text: "Zipline showed me that infrastructure does not always have to be physical. In places where roads cannot be fixed anytime soon, they built something better and faster. It reframed logistics for me as a layered system, not just trucks and warehouses. Because they are solving a public health problem, not just a delivery one, Zipline feels less like a tech company and more like a lifeline!",
            },
            Block::Heading { text: ADOPTION },
            Block::Paragraph {
                text: "High-need, hard-to-reach regions in Indonesia, the Philippines, or the Amazon basin could benefit from this model. In general, anywhere with geographic barriers and critical supply gaps is fair game. With growing applications beyond healthcare, Zipline could become the FedEx for frontier markets.",
            },
        ],
    }
}

fn grameen() -> CaseStudy {
    CaseStudy {
        title: "Grameen Bank",
        icon: "🏦",
        icon_label: "bank",
        image: "/static/stock/grameen.jpg",
        topic: "Microfinance & Economic Empowerment",
        dateline: Some("June 18th, 2025"),
        blocks: vec![
            Block::Heading { text: STORY },
            Block::Paragraph {
                text: "Grameen Bank, founded by Nobel laureate Muhammad Yunus in Bangladesh, pioneered the concept of micro-loans for the poor, particularly for women with no credit history or collateral. By lending tiny amounts to help people start or grow small businesses, Grameen proved that the poor were not un-bankable, they were just underserved.",
            },
            Block::Heading { text: "🚀 Why it’s innovative" },
            Block::Paragraph {
                text: "Instead of relying on credit scores or traditional collateral, Grameen built a system based on community trust and group accountability. It flipped the banking model by betting on those most excluded and in doing so, sparked a global micro-finance revolution.",
            },
            Block::Heading { text: PLAYBOOK },
            Block::List {
                items: vec![
                    "Offered small loans without collateral, often to women-led households",
                    "Used group lending circles to create built-in support and repayment incentives",
                    "Focused on income-generating activities like livestock, crafts, and farming",
                    "Reinvested profits into expanding outreach and social programs",
                ],
            },
            Block::Heading { text: LEARNINGS },
            Block::Paragraph {
                text: "Grameen taught me that empowerment and finance were not mutually exclusive. By trusting borrowers and designing for their realities the model created real upward mobility. It reshaped how I think about risk, especially in emerging markets.",
            },
            Block::Heading { text: ADOPTION },
            Block::Paragraph {
                text: "This approach is tailor-made for rural parts of India, Sub-Saharan Africa, or Southeast Asia, where people live outside the formal credit system. With a layer of digital onboarding and mobile repayment tools, Grameen’s model could thrive in today’s fintech ecosystem, allowing people to bridge inclusion with dignity.",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::CATALOG;

    #[test]
    fn every_catalog_post_has_full_content() {
        for post in CATALOG.iter() {
            let detail = resolve(post.key.slug());
            assert!(!detail.is_placeholder(), "{} resolved to placeholder", post.key.slug());
        }
    }

    #[test]
    fn unknown_keys_get_placeholder() {
        for key in ["", "kiva", "Mpesa", "narayana-health"] {
            assert_eq!(resolve(key), PostDetail::placeholder());
        }
    }

    #[test]
    fn detail_title_matches_summary_title() {
        for post in CATALOG.iter() {
            match resolve_key(post.key) {
                PostDetail::Full(study) => assert_eq!(study.title, post.title),
                PostDetail::Placeholder { .. } => panic!("missing detail"),
            }
        }
    }

    #[test]
    fn each_lookup_builds_a_fresh_value() {
        let a = resolve_key(PostKey::Zipline);
        let b = resolve_key(PostKey::Zipline);
        assert_eq!(a, b);
        match a {
            PostDetail::Full(study) => {
                assert_eq!(study.dateline, Some("July 7th, 2025"));
                assert!(study.blocks.iter().any(|b| matches!(b, Block::List { items } if items.len() == 5)));
            }
            PostDetail::Placeholder { .. } => panic!("zipline missing"),
        }
    }

    #[test]
    fn detail_serializes_with_kind_tag() {
        let v = serde_json::to_value(PostDetail::placeholder()).unwrap();
        assert_eq!(v["kind"], "placeholder");
        assert_eq!(v["text"], PLACEHOLDER_TEXT);
    }
}
