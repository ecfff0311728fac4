use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Mail,
    Phone,
    MessageCircle,
    MessageSquare,
    Rocket,
    Star,
    Sparkles,
    Globe,
    User,
    Code,
    SquareCode,
    Type,
    Palette,
    Server,
    Database,
    Layout,
    Cpu,
    Smartphone,
    Zap,
    Github,
    Linkedin,
    Twitter,
}

impl Icon {
    /// Brand icons come from the devicon font, everything else is a glyph.
    pub fn devicon(self) -> Option<&'static str> {
        match self {
            Icon::Github => Some("devicon-github-plain"),
            Icon::Linkedin => Some("devicon-linkedin-plain"),
            Icon::Twitter => Some("devicon-twitter-original"),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
            Icon::MessageCircle => "💬",
            Icon::MessageSquare => "🗨️",
            Icon::Rocket => "🚀",
            Icon::Star => "⭐",
            Icon::Sparkles => "✨",
            Icon::Globe => "🌍",
            Icon::User => "👤",
            Icon::Code => "⚛️",
            Icon::SquareCode => "🟨",
            Icon::Type => "🔷",
            Icon::Palette => "🎨",
            Icon::Server => "🖥️",
            Icon::Database => "🗄️",
            Icon::Layout => "📐",
            Icon::Cpu => "⚙️",
            Icon::Smartphone => "📱",
            Icon::Zap => "⚡",
            Icon::Github => "🐙",
            Icon::Linkedin => "💼",
            Icon::Twitter => "🐦",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillColor {
    Golden,
    AcidGreen,
    LavaOrange,
    ElectricBlue,
    PurpleNeon,
    #[serde(other)]
    ElectricPink,
}

impl SkillColor {
    pub fn gradient(self) -> &'static str {
        match self {
            SkillColor::Golden => "linear-gradient(135deg, #FFD700 0%, #FFA500 50%, #FF6B00 100%)",
            SkillColor::AcidGreen => {
                "linear-gradient(135deg, #39FF14 0%, #00FF88 50%, #00D4FF 100%)"
            }
            SkillColor::LavaOrange => {
                "linear-gradient(135deg, #FF6B35 0%, #FF8C00 50%, #FF2E00 100%)"
            }
            SkillColor::ElectricBlue => {
                "linear-gradient(135deg, #0066FF 0%, #00D4FF 50%, #00FF88 100%)"
            }
            SkillColor::PurpleNeon => {
                "linear-gradient(135deg, #8B5CF6 0%, #C084FC 50%, #F0ABFC 100%)"
            }
            SkillColor::ElectricPink => {
                "linear-gradient(135deg, #FF0080 0%, #FF2E00 50%, #FF6B00 100%)"
            }
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            SkillColor::Golden => "text-golden",
            SkillColor::AcidGreen => "text-acid-green",
            SkillColor::LavaOrange => "text-lava-orange",
            SkillColor::ElectricBlue => "text-electric-blue",
            SkillColor::PurpleNeon => "text-purple-neon",
            SkillColor::ElectricPink => "text-electric-pink",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub icon: Icon,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub title: String,
    pub availability: String,
    pub location: String,
    pub portrait: String,
    pub roles: Vec<String>,
    pub github_profile: String,
    pub nav: Vec<NavItem>,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub code_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
}

impl Project {
    pub const PLACEHOLDER_IMAGE: &'static str =
        "https://via.placeholder.com/400x300/1e293b/d4af37?text=Project+Image";

    pub fn image_src(&self) -> &str {
        self.image.as_deref().unwrap_or(Self::PLACEHOLDER_IMAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: SkillColor,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    pub color: SkillColor,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsContent {
    pub skills: Vec<Skill>,
    pub categories: Vec<SkillCategory>,
    pub technologies: Vec<String>,
}

/// Where activating a contact card takes the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    SameWindow(String),
    NewTab(String),
}

impl LinkTarget {
    pub fn classify(link: &str) -> Option<Self> {
        if link.starts_with("mailto:") || link.starts_with("tel:") {
            Some(Self::SameWindow(link.to_string()))
        } else if link.starts_with("https://") {
            Some(Self::NewTab(link.to_string()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub icon: Icon,
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl ContactCard {
    pub fn target(&self) -> Option<LinkTarget> {
        self.link.as_deref().and_then(LinkTarget::classify)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingIcon {
    pub icon: Icon,
    /// Percent of the section width.
    pub x: f64,
    /// Percent of the section height.
    pub y: f64,
    /// Seconds.
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub cards: Vec<ContactCard>,
    pub floating: Vec<FloatingIcon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: SkillsContent,
    pub contact: ContactContent,
}

pub(crate) fn load_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let raw = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&raw.data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            profile: load_json("profile.json")?,
            projects: load_json("projects.json")?,
            skills: load_json("skills.json")?,
            contact: load_json("contact.json")?,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        if profile.roles.is_empty() {
            return Err(ContentError::Invalid("hero needs at least one role".into()));
        }
        if let Some(r) = profile.roles.iter().find(|r| r.trim().is_empty()) {
            return Err(ContentError::Invalid(format!("blank hero role {r:?}")));
        }

        let mut anchors = HashSet::new();
        for item in &profile.nav {
            if item.anchor.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "nav item {} has no anchor",
                    item.label
                )));
            }
            if !anchors.insert(item.anchor.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate nav anchor #{}",
                    item.anchor
                )));
            }
        }

        let skills = &self.skills;
        if let Some(s) = skills.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::Invalid(format!(
                "skill {} has level {} > 100",
                s.name, s.level
            )));
        }
        let names = skills
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<HashSet<_>>();
        for category in &skills.categories {
            if let Some(missing) = category
                .skills
                .iter()
                .find(|s| !names.contains(s.as_str()))
            {
                return Err(ContentError::Invalid(format!(
                    "category {} lists unknown skill {}",
                    category.title, missing
                )));
            }
        }
        Ok(())
    }
}

/// Content shared by every page render. Embedded, so an error here is a build defect.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> SiteContent {
        SiteContent::load().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = content();
        assert_eq!(content.profile.roles.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.skills.len(), 11);
        assert_eq!(content.contact.cards.len(), 3);
        assert!(site_content().is_ok());
    }

    #[test]
    fn test_nav_anchors_match_sections() {
        let content = content();
        let anchors = content
            .profile
            .nav
            .iter()
            .map(|n| n.href())
            .collect::<Vec<_>>();
        assert_eq!(anchors, vec!["#home", "#work", "#skills", "#contact"]);
    }

    #[test]
    fn test_level_over_hundred_rejected() {
        let mut content = content();
        content.skills.skills[0].level = 101;
        assert!(matches!(content.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_unknown_category_skill_rejected() {
        let mut content = content();
        content.skills.categories[0]
            .skills
            .push("COBOL".to_string());
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("COBOL"));
    }

    #[test]
    fn test_duplicate_anchor_rejected() {
        let mut content = content();
        let dup = content.profile.nav[0].clone();
        content.profile.nav.push(dup);
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_empty_roles_rejected() {
        let mut content = content();
        content.profile.roles.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_blank_role_rejected() {
        let mut content = content();
        content.profile.roles.push("  ".to_string());
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("blank hero role"));
    }

    #[test]
    fn test_empty_anchor_rejected() {
        let mut content = content();
        content.profile.nav[0].anchor.clear();
        let err = content.validate().unwrap_err();
        assert_eq!(
            err,
            ContentError::Invalid("nav item Home has no anchor".to_string())
        );
    }

    #[test]
    fn test_missing_file() {
        let res = load_json::<Profile>("nope.json");
        assert_eq!(res, Err(ContentError::NotFound("nope.json".to_string())));
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let color: SkillColor = serde_json::from_str("\"hot-magenta\"").unwrap();
        assert_eq!(color, SkillColor::ElectricPink);
        assert_eq!(SkillColor::Golden.text_class(), "text-golden");
    }

    #[test]
    fn test_link_classification() {
        assert_eq!(
            LinkTarget::classify("mailto:a@b.c"),
            Some(LinkTarget::SameWindow("mailto:a@b.c".to_string()))
        );
        assert_eq!(
            LinkTarget::classify("tel:+256"),
            Some(LinkTarget::SameWindow("tel:+256".to_string()))
        );
        assert_eq!(
            LinkTarget::classify("https://wa.me/1"),
            Some(LinkTarget::NewTab("https://wa.me/1".to_string()))
        );
        assert_eq!(LinkTarget::classify("http://insecure.example"), None);

        let content = content();
        let location = &content.contact.cards[2];
        assert_eq!(location.target(), None);
    }

    #[test]
    fn test_placeholder_image() {
        let mut project = content().projects[0].clone();
        project.image = None;
        assert_eq!(project.image_src(), Project::PLACEHOLDER_IMAGE);
    }
}
