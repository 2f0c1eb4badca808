mod app;

use app::WordForgeApp;
use log::{error, warn};
use wordforge_core::config::AppConfig;
use wordforge_core::services::{CmuDict, MyMemoryTranslator, Translator};
use wordforge_core::VocabularyStore;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let phonetics = CmuDict::load_or_empty(&config.cmudict_path);

    let store = match VocabularyStore::open(&config.vocabulary_path, Box::new(phonetics)) {
        Ok(store) => store,
        Err(e) => {
            error!(
                "Failed to load vocabulary from '{}': {}",
                config.vocabulary_path.display(),
                e
            );
            std::process::exit(1);
        }
    };
    let translator: Option<Box<dyn Translator>> =
        match MyMemoryTranslator::new(config.source_lang.clone(), config.translation_timeout) {
            Ok(translator) => Some(Box::new(translator)),
            Err(e) => {
                warn!("Translation disabled: {}", e);
                None
            }
        };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("WordForge"),
        ..Default::default()
    };
    eframe::run_native(
        "WordForge",
        options,
        Box::new(|_cc| Ok(Box::new(WordForgeApp::new(config, store, translator)))),
    )
}
