//! Tool registry
//!
//! Static table of the ten tool templates this crate can scaffold.
//! Single source of truth for tool metadata: the generator reads
//! name/description/monetization, and repository tooling reads topics.
//!
//! Tools:
//! - prompt-testing-lab: AI Prompt Testing Lab
//! - meeting-action-extractor: Meeting Notes → Action Items Extractor
//! - resume-optimizer: Resume ATS Optimizer
//! - social-media-multiplier: Social Media Post Multiplier
//! - contract-analyzer: Contract Red Flag Analyzer
//! - email-response-generator: Email Response Generator Pro
//! - sales-outreach-personalizer: Sales Outreach Personalizer
//! - product-description-generator: Product Description Generator for E-commerce
//! - interview-prep-coach: Interview Question Prep Coach
//! - seo-content-optimizer: Blog Post → SEO Content Optimizer

use serde::Serialize;

/// One tool template's metadata
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Kebab-case identifier, also the generated directory name
    pub id: String,

    /// Display name
    pub name: String,

    /// One-sentence description
    pub description: String,

    /// Monetization note included in the generated README
    pub monetization: String,

    /// Repository topic tags
    pub topics: Vec<String>,
}

impl ToolSpec {
    /// Create a tool spec
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        monetization: &str,
        topics: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            monetization: monetization.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Manifest package name: the id with dashes turned to underscores
    pub fn package_name(&self) -> String {
        self.id.replace('-', "_")
    }
}

/// Registry of all scaffoldable tools, in registration order
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Create a registry with all ten tools registered
    pub fn new() -> Self {
        let mut registry = Self { tools: Vec::new() };

        registry.register_prompt_testing_lab();
        registry.register_meeting_action_extractor();
        registry.register_resume_optimizer();
        registry.register_social_media_multiplier();
        registry.register_contract_analyzer();
        registry.register_email_response_generator();
        registry.register_sales_outreach_personalizer();
        registry.register_product_description_generator();
        registry.register_interview_prep_coach();
        registry.register_seo_content_optimizer();

        registry
    }

    fn register(&mut self, spec: ToolSpec) {
        self.tools.push(spec);
    }

    fn register_prompt_testing_lab(&mut self) {
        self.register(ToolSpec::new(
            "prompt-testing-lab",
            "AI Prompt Testing Lab",
            "Interactive tool where users paste prompts, test across different scenarios, \
             compare outputs, and save/version their best prompts.",
            "Freemium - limit saves/tests, charge for teams/export features",
            &[
                "ai",
                "prompt-engineering",
                "claude",
                "anthropic",
                "testing",
                "react",
                "vite",
                "frontend",
                "ai-tools",
            ],
        ));
    }

    fn register_meeting_action_extractor(&mut self) {
        self.register(ToolSpec::new(
            "meeting-action-extractor",
            "Meeting Notes → Action Items Extractor",
            "Paste meeting transcript or notes, AI extracts action items, assigns priority, \
             suggests owners, and formats for Slack/email/project tools.",
            "Pay-per-conversion or monthly subscription",
            &[
                "ai",
                "meetings",
                "productivity",
                "action-items",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_resume_optimizer(&mut self) {
        self.register(ToolSpec::new(
            "resume-optimizer",
            "Resume ATS Optimizer",
            "Upload resume and job description, AI scores ATS compatibility, suggests keyword \
             improvements, reformats for optimal parsing, shows before/after comparison.",
            "$9-29 per resume optimization, or monthly unlimited",
            &[
                "ai",
                "resume",
                "ats",
                "job-search",
                "career",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_social_media_multiplier(&mut self) {
        self.register(ToolSpec::new(
            "social-media-multiplier",
            "Social Media Post Multiplier",
            "Input one idea/post, AI generates versions for Twitter, LinkedIn, Instagram, \
             Facebook with optimal formatting, hashtags, and hooks for each platform.",
            "Credit-based system or monthly subscription",
            &[
                "ai",
                "social-media",
                "content-creation",
                "marketing",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_contract_analyzer(&mut self) {
        self.register(ToolSpec::new(
            "contract-analyzer",
            "Contract Red Flag Analyzer",
            "Paste contract text, AI highlights risky clauses, unfavorable terms, missing \
             protections, and explains implications in plain English.",
            "$19-49 per contract analysis",
            &[
                "ai",
                "legal",
                "contracts",
                "analysis",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_email_response_generator(&mut self) {
        self.register(ToolSpec::new(
            "email-response-generator",
            "Email Response Generator Pro",
            "Input received email + context, AI generates 3-5 response options (professional, \
             friendly, firm, brief). Learn user's writing style over time.",
            "Monthly subscription with usage tiers",
            &[
                "ai",
                "email",
                "productivity",
                "writing",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_sales_outreach_personalizer(&mut self) {
        self.register(ToolSpec::new(
            "sales-outreach-personalizer",
            "Sales Outreach Personalizer",
            "Input prospect LinkedIn/company info + your offer, AI generates personalized cold \
             email with multiple variants and subject lines.",
            "Per-email credits or unlimited monthly",
            &[
                "ai",
                "sales",
                "outreach",
                "email",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_product_description_generator(&mut self) {
        self.register(ToolSpec::new(
            "product-description-generator",
            "Product Description Generator for E-commerce",
            "Input basic product details/features, AI generates SEO-optimized descriptions, \
             bullet points, meta descriptions in brand voice. Multiple style options.",
            "Bulk credits or monthly subscription",
            &[
                "ai",
                "ecommerce",
                "seo",
                "product-descriptions",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_interview_prep_coach(&mut self) {
        self.register(ToolSpec::new(
            "interview-prep-coach",
            "Interview Question Prep Coach",
            "Input job description, AI generates likely interview questions, provides sample \
             answers, offers feedback on user's practice responses.",
            "$29-99 per job prep package",
            &[
                "ai",
                "interviews",
                "career",
                "job-prep",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    fn register_seo_content_optimizer(&mut self) {
        self.register(ToolSpec::new(
            "seo-content-optimizer",
            "Blog Post → SEO Content Optimizer",
            "Paste blog draft, AI suggests title variations, meta descriptions, heading \
             structure, internal linking opportunities, keyword density improvements.",
            "Per-post fee or monthly subscription",
            &[
                "ai",
                "seo",
                "content-marketing",
                "blogging",
                "claude",
                "anthropic",
                "react",
                "vite",
                "ai-tools",
            ],
        ));
    }

    /// Get a tool spec by id
    pub fn get(&self, id: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|spec| spec.id == id)
    }

    /// Check if a tool id exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All tool ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|spec| spec.id.as_str()).collect()
    }

    /// Iterate over tool specs in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    /// Total number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 10);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_all_tools_registered() {
        let registry = ToolRegistry::new();

        for id in [
            "prompt-testing-lab",
            "meeting-action-extractor",
            "resume-optimizer",
            "social-media-multiplier",
            "contract-analyzer",
            "email-response-generator",
            "sales-outreach-personalizer",
            "product-description-generator",
            "interview-prep-coach",
            "seo-content-optimizer",
        ] {
            assert!(registry.contains(id), "missing tool {id}");
        }
    }

    #[test]
    fn test_registration_order_is_stable() {
        let registry = ToolRegistry::new();
        let ids = registry.ids();
        assert_eq!(ids.first(), Some(&"prompt-testing-lab"));
        assert_eq!(ids.last(), Some(&"seo-content-optimizer"));
    }

    #[test]
    fn test_get_tool_spec() {
        let registry = ToolRegistry::new();

        let spec = registry.get("resume-optimizer").expect("known tool");
        assert_eq!(spec.name, "Resume ATS Optimizer");
        assert!(spec.description.contains("ATS"));
        assert!(!spec.monetization.is_empty());
    }

    #[test]
    fn test_package_name_conversion() {
        let registry = ToolRegistry::new();
        let spec = registry.get("prompt-testing-lab").expect("known tool");
        assert_eq!(spec.package_name(), "prompt_testing_lab");
    }

    #[test]
    fn test_every_tool_has_topics() {
        let registry = ToolRegistry::new();
        for spec in registry.iter() {
            assert!(!spec.topics.is_empty(), "{} has no topics", spec.id);
            assert!(
                spec.topics.iter().any(|t| t == "ai"),
                "{} missing the ai topic",
                spec.id
            );
        }
    }

    #[test]
    fn test_nonexistent_tool() {
        let registry = ToolRegistry::new();
        assert!(!registry.contains("nonexistent-tool"));
        assert!(registry.get("nonexistent-tool").is_none());
    }
}
