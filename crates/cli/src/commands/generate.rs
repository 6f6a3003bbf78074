//! Payload generation and rendering for every input mode.
//!
//! Advisory validation (address shapes, missing Wi-Fi password, malformed
//! email/URL) is logged as warnings and never aborts generation - the same
//! policy the server applies.

use std::path::{Path, PathBuf};

use clap::Args;

use qrforge_core::render_config::{
    DotStyle, ErrorCorrection, LogoOverlay, RenderConfig,
};
use qrforge_core::theme::{ColorTheme, ThemePaint, theme_by_name};
use qrforge_core::types::{
    ContactCard, CryptoKind, MeCardContact, PaymentDraft, PaymentRequest, WifiNetwork,
};
use qrforge_core::validate::{validate_email, validate_url};
use qrforge_core::Collector;
use qrforge_render::Renderer;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

type CommandError = Box<dyn std::error::Error>;

/// Error correction level flag.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum EcArg {
    L,
    M,
    Q,
    H,
}

impl std::fmt::Display for EcArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L => write!(f, "l"),
            Self::M => write!(f, "m"),
            Self::Q => write!(f, "q"),
            Self::H => write!(f, "h"),
        }
    }
}

/// Dot style flag.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DotArg {
    Square,
    Rounded,
    Dots,
}

impl std::fmt::Display for DotArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Rounded => write!(f, "rounded"),
            Self::Dots => write!(f, "dots"),
        }
    }
}

/// Styling flags shared by every generation command.
#[derive(Args)]
pub struct StyleArgs {
    /// Output edge length in pixels (256-4096)
    #[arg(long, default_value_t = RenderConfig::DEFAULT_SIZE)]
    pub size: u32,

    /// Error correction level
    #[arg(long, value_enum, default_value_t = EcArg::Q)]
    pub ec_level: EcArg,

    /// Dot style
    #[arg(long, value_enum, default_value_t = DotArg::Square)]
    pub dot_style: DotArg,

    /// Theme preset name (see `qrforge themes`)
    #[arg(long, conflicts_with_all = ["color1", "color2", "angle"])]
    pub theme: Option<String>,

    /// Custom foreground color (6-digit hex)
    #[arg(long)]
    pub color1: Option<String>,

    /// Custom gradient end color (6-digit hex)
    #[arg(long, requires = "color1")]
    pub color2: Option<String>,

    /// Custom gradient angle in degrees
    #[arg(long, requires = "color2")]
    pub angle: Option<f64>,

    /// Opaque background color (6-digit hex); omitted means transparent
    #[arg(long)]
    pub background: Option<String>,

    /// Quiet zone in pixels (0-64)
    #[arg(long, default_value_t = 0)]
    pub quiet_zone: u32,

    /// PNG logo overlaid at the symbol center
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Logo size as a percentage of the symbol width (5-30)
    #[arg(long, default_value_t = LogoOverlay::DEFAULT_SIZE_PERCENT)]
    pub logo_size: u8,

    /// Clear the modules behind the logo with a white margin
    #[arg(long)]
    pub knockout: bool,
}

impl StyleArgs {
    fn to_config(&self) -> Result<RenderConfig, CommandError> {
        let mut config = RenderConfig::default();
        config.set_size(self.size);
        config.set_quiet_zone(self.quiet_zone);
        config.error_correction = match self.ec_level {
            EcArg::L => ErrorCorrection::L,
            EcArg::M => ErrorCorrection::M,
            EcArg::Q => ErrorCorrection::Q,
            EcArg::H => ErrorCorrection::H,
        };
        config.dot_style = match self.dot_style {
            DotArg::Square => DotStyle::Square,
            DotArg::Rounded => DotStyle::Rounded,
            DotArg::Dots => DotStyle::Dots,
        };

        if let Some(name) = &self.theme {
            config.theme =
                theme_by_name(name).ok_or_else(|| format!("unknown theme {name:?}"))?;
        } else if let Some(color1) = &self.color1 {
            let paint = match &self.color2 {
                Some(color2) => ThemePaint::Gradient {
                    color1: color1.clone(),
                    color2: color2.clone(),
                    angle: RenderConfig::normalize_angle(self.angle.unwrap_or(135.0)),
                },
                None => ThemePaint::Solid {
                    color1: color1.clone(),
                },
            };
            config.theme = ColorTheme {
                name: ColorTheme::CUSTOM.to_string(),
                paint,
            };
        }

        if let Some(background) = &self.background {
            config.background_transparent = false;
            config.background_color = background.clone();
        }

        if let Some(path) = &self.logo {
            let data = std::fs::read(path)?;
            if data.get(..8) != Some(&PNG_MAGIC[..]) {
                return Err(format!("{} is not a PNG image", path.display()).into());
            }
            let mut overlay = LogoOverlay::new(data);
            overlay.size_percent = LogoOverlay::clamp_size(self.logo_size);
            overlay.white_knockout = self.knockout;
            config.set_logo(overlay);
        }

        Ok(config)
    }
}

/// Output destination flags shared by every generation command.
#[derive(Args)]
pub struct OutputArgs {
    /// Write the rendered symbol here (.png or .svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the encoded payload instead of rendering an image
    #[arg(long)]
    pub payload_only: bool,
}

pub async fn text(
    text: String,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<(), CommandError> {
    let mut collector = Collector::new();
    collector.set_text(text);
    emit(&collector, style, output).await
}

pub async fn vcard(
    contact: ContactCard,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<(), CommandError> {
    warn_contact_fields(&contact.email, &contact.website);
    let mut collector = Collector::new();
    collector.set_contact(contact);
    emit(&collector, style, output).await
}

pub async fn mecard(
    contact: MeCardContact,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<(), CommandError> {
    warn_contact_fields(&contact.email, &contact.website);
    let mut collector = Collector::new();
    collector.set_mecard(contact);
    emit(&collector, style, output).await
}

pub async fn wifi(
    network: WifiNetwork,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<(), CommandError> {
    let mut collector = Collector::new();
    collector.set_wifi(network);
    emit(&collector, style, output).await
}

pub async fn payment(
    request: PaymentRequest,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<(), CommandError> {
    let mut collector = Collector::new();
    collector.set_payment(draft_from_request(request));
    emit(&collector, style, output).await
}

/// Map a typed request back onto the collector's form-shaped draft so the
/// usual advisory validation runs.
fn draft_from_request(request: PaymentRequest) -> PaymentDraft {
    match request {
        PaymentRequest::Bitcoin { address, amount } => PaymentDraft {
            kind: CryptoKind::Bitcoin,
            address,
            amount,
            ..PaymentDraft::default()
        },
        PaymentRequest::Ethereum {
            address,
            amount,
            chain_id,
            token,
        } => {
            let (erc20, token_contract, recipient_address) = match token {
                Some(token) => (true, token.token_contract, token.recipient_address),
                None => (false, String::new(), String::new()),
            };
            PaymentDraft {
                kind: CryptoKind::Ethereum,
                address,
                amount,
                chain_id,
                erc20,
                token_contract,
                recipient_address,
            }
        }
        PaymentRequest::Lightning { invoice } => PaymentDraft {
            kind: CryptoKind::Lightning,
            address: invoice,
            ..PaymentDraft::default()
        },
    }
}

/// Advisory checks on contact email/website fields.
fn warn_contact_fields(email: &str, website: &str) {
    if !email.is_empty() && !validate_email(email) {
        tracing::warn!(email, "Email looks malformed; encoding it anyway");
    }
    if !website.is_empty() && !validate_url(website) {
        tracing::warn!(website, "Website is not a valid URL; encoding it anyway");
    }
}

/// Print or render the collected payload.
async fn emit(
    collector: &Collector,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<(), CommandError> {
    if let Some(hint) = collector.validation().message.as_deref() {
        tracing::warn!(hint, "Advisory validation failed; continuing");
    }
    if let Some(warning) = collector.warning() {
        tracing::warn!(warning, "Advisory warning; continuing");
    }

    if output.payload_only {
        print_payload(collector.payload());
        return Ok(());
    }

    let config = style.to_config()?;
    let path = output.output.clone().unwrap_or_else(default_output_path);

    let renderer = Renderer::styled();
    let bytes = if is_svg(&path) {
        renderer.export_svg(collector.payload(), &config).await?
    } else {
        renderer.export_png(collector.payload(), &config).await?
    };

    std::fs::write(&path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Symbol written");
    Ok(())
}

#[allow(clippy::print_stdout)] // the payload is this command's output
fn print_payload(payload: &str) {
    println!("{payload}");
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!("qr-code-{}.png", chrono::Utc::now().timestamp_millis()))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
