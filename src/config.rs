//! Engine configuration
//!
//! `BlogConfig` is read-only input to the engine: site identity, pagination
//! sizes, and feature toggles. The engine never mutates it; hosts load it
//! once (TOML on disk or built in code) and hand it to the store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Blog-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub title: String,
    pub description: String,
    /// Default author name for documents whose frontmatter names none
    pub author: String,
    /// Absolute site URL; its host distinguishes internal from external links
    pub base_url: String,
    pub posts_per_page: usize,
    pub featured_posts_count: usize,
    pub recent_posts_count: usize,
    pub related_posts_count: usize,
    pub enable_comments: bool,
    pub enable_search: bool,
    pub enable_rss: bool,
    pub enable_analytics: bool,
    pub social_sharing: SocialSharingConfig,
    pub seo: SeoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSharingConfig {
    pub enabled: bool,
    pub platforms: SharingPlatforms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharingPlatforms {
    pub twitter: bool,
    pub linkedin: bool,
    pub facebook: bool,
    pub reddit: bool,
    pub hackernews: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub site_name: String,
    pub twitter_handle: Option<String>,
    /// Fallback social image for documents without a cover image
    pub default_image: String,
    pub enable_structured_data: bool,
    pub enable_open_graph: bool,
    pub enable_twitter_cards: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        BlogConfig {
            title: "Penmark Blog".to_string(),
            description: "Technical writing on software engineering".to_string(),
            author: "Site Author".to_string(),
            base_url: "https://example.com/blog".to_string(),
            posts_per_page: 12,
            featured_posts_count: 3,
            recent_posts_count: 5,
            related_posts_count: 3,
            enable_comments: true,
            enable_search: true,
            enable_rss: true,
            enable_analytics: true,
            social_sharing: SocialSharingConfig::default(),
            seo: SeoConfig::default(),
        }
    }
}

impl Default for SocialSharingConfig {
    fn default() -> Self {
        SocialSharingConfig {
            enabled: true,
            platforms: SharingPlatforms::default(),
        }
    }
}

impl Default for SharingPlatforms {
    fn default() -> Self {
        SharingPlatforms {
            twitter: true,
            linkedin: true,
            facebook: true,
            reddit: true,
            hackernews: true,
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        SeoConfig {
            site_name: "Penmark Blog".to_string(),
            twitter_handle: None,
            default_image: "/assets/images/blog-default.jpg".to_string(),
            enable_structured_data: true,
            enable_open_graph: true,
            enable_twitter_cards: true,
        }
    }
}

impl BlogConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BlogConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::PenmarkError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Host portion of `base_url`, used for external-link detection
    pub fn site_host(&self) -> Option<String> {
        crate::markdown::site_host_of(&self.base_url)
    }
}
