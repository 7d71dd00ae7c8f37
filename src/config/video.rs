//! Built-in registry for `cs2_video.txt`

use super::schema::{Schema, SchemaEntry, SettingOption, opt};
use std::sync::LazyLock;

static VIDEO_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    build_video_schema().expect("built-in video schema is valid")
});

/// The process-wide video settings registry
///
/// Built once on first use and never mutated afterwards.
pub fn video_schema() -> &'static Schema {
    &VIDEO_SCHEMA
}

fn quality_levels(top: &str) -> Vec<SettingOption> {
    vec![opt("0", "Low"), opt("1", "Med"), opt("2", "High"), opt("3", top)]
}

fn detail_levels() -> Vec<SettingOption> {
    vec![
        opt("0", "Low"),
        opt("1", "Medium"),
        opt("2", "High"),
        opt("3", "Ultra"),
    ]
}

fn build_video_schema() -> crate::Result<Schema> {
    crate::schema! {
        "setting.max_fps" => SchemaEntry::number("FPS Limit", 0, 999)
            .description("Maximum frame rate, 0 means unlimited"),
        "setting.defaultres" => SchemaEntry::number("Resolution Width", 320, 7680),
        "setting.defaultresheight" => SchemaEntry::number("Resolution Height", 200, 4320),
        "setting.refreshrate_numerator" => SchemaEntry::number("Refresh Rate (Hz)", 30, 1000),
        "setting.refreshrate_denominator" => SchemaEntry::number("Refresh Denominator", 1, 4),
        "setting.fullscreen" => SchemaEntry::toggle("Fullscreen"),
        "setting.mat_vsync" => SchemaEntry::toggle("V-Sync"),
        "setting.monitor_index" => SchemaEntry::number("Monitor Index", 0, 7),
        "setting.cpu_level" => SchemaEntry::select("CPU Detail Level", detail_levels()),
        "setting.gpu_mem_level" => SchemaEntry::select("GPU Memory Level", detail_levels()),
        "setting.gpu_level" => SchemaEntry::select("GPU Detail Level", detail_levels()),
        "setting.knowndevice" => SchemaEntry::toggle("Known Device (Auto)"),
        "setting.nowindowborder" => SchemaEntry::toggle("No Window Border"),
        "setting.fullscreen_min_on_focus_loss" => SchemaEntry::toggle("Minimize On Focus Loss"),
        "setting.high_dpi" => SchemaEntry::toggle("High DPI"),
        "setting.coop_fullscreen" => SchemaEntry::toggle("Coop Fullscreen"),
        "setting.shaderquality" => SchemaEntry::select("Shader Quality", quality_levels("Ultra")),
        "setting.r_texturefilteringquality" => SchemaEntry::select("Texture Filtering", vec![
            opt("0", "Bilinear"),
            opt("1", "Trilinear"),
            opt("2", "Aniso 4x"),
            opt("3", "Aniso 8x"),
            opt("4", "Aniso 16x"),
        ]),
        "setting.msaa_samples" => SchemaEntry::select("MSAA Samples", vec![
            opt("0", "Off"),
            opt("2", "2x"),
            opt("4", "4x"),
            opt("8", "8x"),
        ]),
        "setting.r_csgo_cmaa_enable" => SchemaEntry::toggle("CMAA Anti-Aliasing"),
        "setting.videocfg_shadow_quality" => SchemaEntry::select("Shadow Quality", quality_levels("Very High")),
        "setting.videocfg_dynamic_shadows" => SchemaEntry::select("Dynamic Shadows", vec![
            opt("0", "Off"),
            opt("1", "Some"),
            opt("2", "All"),
        ]),
        "setting.videocfg_texture_detail" => SchemaEntry::select("Texture Detail", quality_levels("Ultra")),
        "setting.videocfg_particle_detail" => SchemaEntry::select("Particle Detail", quality_levels("Ultra")),
        "setting.videocfg_ao_detail" => SchemaEntry::select("Ambient Occlusion", vec![
            opt("0", "Disabled"),
            opt("1", "Low"),
            opt("2", "High"),
        ]),
        "setting.videocfg_hdr_detail" => SchemaEntry::select("HDR Detail", vec![
            opt("-1", "Quality"),
            opt("0", "Performance"),
            opt("1", "Balanced"),
            opt("2", "Quality"),
        ]),
        "setting.videocfg_fsr_detail" => SchemaEntry::select("FSR Detail", vec![
            opt("0", "Off"),
            opt("1", "Performance"),
            opt("2", "Balanced"),
            opt("3", "Quality"),
            opt("4", "Ultra Quality"),
        ]),
        "setting.r_low_latency" => SchemaEntry::select("Low Latency (Reflex)", vec![
            opt("0", "Disabled"),
            opt("1", "Enabled"),
            opt("2", "Enabled + Boost"),
        ]),
        "setting.aspectratiomode" => SchemaEntry::select("Aspect Ratio Mode", vec![
            opt("0", "Auto"),
            opt("1", "4:3 Str"),
            opt("2", "16:9"),
            opt("3", "16:10"),
        ]),
        // Written by the game, shown but never edited
        "Version" => SchemaEntry::info("Version"),
        "VendorID" => SchemaEntry::info("GPU VendorID"),
        "DeviceID" => SchemaEntry::info("GPU DeviceID"),
        "Autoconfig" => SchemaEntry::info("Auto Config"),
    }
}
