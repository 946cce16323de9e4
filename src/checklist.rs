//! Required-file checklist for the Teams transcription application.
//!
//! The checklist is a data table rather than code so it can be diffed and
//! tested independently of the audit loop that consumes it.

use serde::Serialize;

/// A single required file: where it lives and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    /// Path relative to the project root.
    pub path: &'static str,

    /// Human-readable label printed next to the path.
    pub description: &'static str,
}

impl CheckItem {
    pub const fn new(path: &'static str, description: &'static str) -> Self {
        Self { path, description }
    }
}

/// Every file the project scaffold must contain, in report order.
pub const REQUIRED_FILES: [CheckItem; 17] = [
    CheckItem::new("CMakeLists.txt", "Main CMake configuration"),
    CheckItem::new("src/main.cpp", "Application entry point"),
    CheckItem::new("src/AudioCapture.h", "Audio capture header"),
    CheckItem::new("src/AudioCapture.cpp", "Audio capture implementation"),
    CheckItem::new("src/MainWindow.h", "Main window header"),
    CheckItem::new("src/MainWindow.cpp", "Main window implementation"),
    CheckItem::new("src/ConfigManager.h", "Configuration manager header"),
    CheckItem::new("src/ConfigManager.cpp", "Configuration manager implementation"),
    CheckItem::new("src/SpeechRecognition.h", "Speech recognition header"),
    CheckItem::new("src/SpeechRecognition.cpp", "Speech recognition implementation"),
    CheckItem::new("src/ProcessMonitor.h", "Process monitor header"),
    CheckItem::new("src/ProcessMonitor.cpp", "Process monitor implementation"),
    CheckItem::new("src/resource.h", "Resource definitions"),
    CheckItem::new("libs/json/include/nlohmann/json.hpp", "JSON library"),
    CheckItem::new("config/settings.example.json", "Example configuration"),
    CheckItem::new("resources/app.rc", "Windows resource file"),
    CheckItem::new("scripts/build.bat", "Build script"),
];
