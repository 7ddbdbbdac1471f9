//! Shared fixtures for handler tests: core messages and a temp asset directory.
#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, User};
use image::{Rgba, RgbaImage};
use nfpa_diamond::{AssetPaths, DiamondRenderer, SpecialHazard};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::RwLock;

pub const CHAT_ID: i64 = 456;

pub fn message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("chemist".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

pub fn username(name: Option<&str>) -> Arc<RwLock<Option<String>>> {
    Arc::new(RwLock::new(name.map(str::to_string)))
}

/// Temp dir with a 128x128 template, an `out/` directory and no font.
pub struct Assets {
    pub dir: TempDir,
    pub renderer: Arc<DiamondRenderer>,
}

impl Assets {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("icons")).unwrap();
        std::fs::create_dir_all(dir.path().join("out")).unwrap();
        RgbaImage::from_pixel(128, 128, Rgba([255, 255, 255, 255]))
            .save(dir.path().join("blank_diamond.png"))
            .unwrap();
        let assets = AssetPaths::under(dir.path()).with_font(None);
        let renderer = Arc::new(DiamondRenderer::new(assets, dir.path().join("out")));
        Self { dir, renderer }
    }

    pub fn add_icon(&self, hazard: SpecialHazard) {
        RgbaImage::from_pixel(20, 20, Rgba([0, 0, 255, 255]))
            .save(self.renderer.assets().icon_path(hazard))
            .unwrap();
    }

    pub fn add_help_image(&self) {
        RgbaImage::from_pixel(10, 10, Rgba([0, 255, 0, 255]))
            .save(&self.renderer.assets().help_image)
            .unwrap();
    }

    pub fn output_files(&self) -> usize {
        std::fs::read_dir(self.dir.path().join("out")).unwrap().count()
    }
}
