//! QRforge CLI - payload and symbol generation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Print the encoded string only
//! qrforge wifi --ssid MyWiFi --password hunter2 --payload-only
//!
//! # Render a styled PNG
//! qrforge wifi --ssid MyWiFi --password hunter2 -o join.png --dot-style rounded
//!
//! # Contact card as SVG with a gradient preset
//! qrforge vcard --first-name Ada --last-name Lovelace -o card.svg --theme "Blue to Red"
//!
//! # EIP-681 token transfer
//! qrforge pay ethereum --token-contract 0xA0b8... --recipient 0xRecv... --amount 1000000 -o pay.png
//!
//! # List theme presets
//! qrforge themes
//! ```
//!
//! # Commands
//!
//! - `text` / `vcard` / `mecard` / `wifi` / `pay` - one per input mode
//! - `themes` - list the theme preset catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};

mod commands;

use commands::generate::{OutputArgs, StyleArgs};

#[derive(Parser)]
#[command(name = "qrforge")]
#[command(author, version, about = "QRforge payload and symbol generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode free text or a URL
    Text {
        /// The text to encode
        text: String,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encode a vCard 3.0 contact card
    Vcard {
        #[command(flatten)]
        contact: VcardArgs,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encode a MeCard contact record
    Mecard {
        #[command(flatten)]
        contact: MecardArgs,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encode Wi-Fi join credentials
    Wifi {
        #[command(flatten)]
        network: WifiArgs,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encode a cryptocurrency payment URI
    Pay {
        #[command(subcommand)]
        request: PayCommand,
    },
    /// List the theme preset catalog
    Themes,
}

#[derive(Args)]
struct VcardArgs {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    organization: String,
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    note: String,
}

#[derive(Args)]
struct MecardArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    note: String,
}

#[derive(Args)]
struct WifiArgs {
    /// Network name
    #[arg(long)]
    ssid: String,
    /// Network password (omit for open networks)
    #[arg(long, default_value = "")]
    password: String,
    /// Authentication: WPA, WPA2, WEP or nopass
    #[arg(long, default_value = "WPA2")]
    security: String,
    /// The network does not broadcast its SSID
    #[arg(long)]
    hidden: bool,
}

#[derive(Subcommand)]
enum PayCommand {
    /// `bitcoin:` payment URI
    Bitcoin {
        /// Bitcoin address (legacy or Bech32)
        #[arg(long)]
        address: String,
        /// Amount in BTC (optional)
        #[arg(long, default_value = "")]
        amount: String,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// `ethereum:` EIP-681 payment URI
    Ethereum {
        /// Account address for a plain transfer
        #[arg(long, default_value = "")]
        address: String,
        /// Amount in wei (plain) or token base units (ERC-20)
        #[arg(long, default_value = "")]
        amount: String,
        /// EIP-681 chain id (1 = mainnet)
        #[arg(long, default_value = "1")]
        chain_id: String,
        /// ERC-20 token contract address (requires --recipient)
        #[arg(long, requires = "recipient")]
        token_contract: Option<String>,
        /// ERC-20 recipient address (requires --token-contract)
        #[arg(long, requires = "token_contract")]
        recipient: Option<String>,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// `lightning:` invoice URI
    Lightning {
        /// Lightning invoice or identifier
        #[arg(long)]
        invoice: String,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Text { text, style, output } => {
            commands::generate::text(text, &style, &output).await?;
        }
        Commands::Vcard {
            contact,
            style,
            output,
        } => {
            commands::generate::vcard(contact.into(), &style, &output).await?;
        }
        Commands::Mecard {
            contact,
            style,
            output,
        } => {
            commands::generate::mecard(contact.into(), &style, &output).await?;
        }
        Commands::Wifi {
            network,
            style,
            output,
        } => {
            commands::generate::wifi(network.try_into()?, &style, &output).await?;
        }
        Commands::Pay { request } => match request {
            PayCommand::Bitcoin {
                address,
                amount,
                style,
                output,
            } => {
                let request = qrforge_core::PaymentRequest::Bitcoin { address, amount };
                commands::generate::payment(request, &style, &output).await?;
            }
            PayCommand::Ethereum {
                address,
                amount,
                chain_id,
                token_contract,
                recipient,
                style,
                output,
            } => {
                let token = token_contract.zip(recipient).map(|(contract, recipient)| {
                    qrforge_core::TokenTransfer {
                        token_contract: contract,
                        recipient_address: recipient,
                    }
                });
                let request = qrforge_core::PaymentRequest::Ethereum {
                    address,
                    amount,
                    chain_id,
                    token,
                };
                commands::generate::payment(request, &style, &output).await?;
            }
            PayCommand::Lightning {
                invoice,
                style,
                output,
            } => {
                let request = qrforge_core::PaymentRequest::Lightning { invoice };
                commands::generate::payment(request, &style, &output).await?;
            }
        },
        Commands::Themes => commands::themes::list(),
    }
    Ok(())
}

impl From<VcardArgs> for qrforge_core::ContactCard {
    fn from(args: VcardArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            organization: args.organization,
            title: args.title,
            phone: args.phone,
            email: args.email,
            website: args.website,
            address: args.address,
            note: args.note,
        }
    }
}

impl From<MecardArgs> for qrforge_core::MeCardContact {
    fn from(args: MecardArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
            email: args.email,
            website: args.website,
            address: args.address,
            note: args.note,
        }
    }
}

impl TryFrom<WifiArgs> for qrforge_core::WifiNetwork {
    type Error = String;

    fn try_from(args: WifiArgs) -> Result<Self, Self::Error> {
        let security = match args.security.as_str() {
            "WPA" => qrforge_core::WifiSecurity::Wpa,
            "WPA2" => qrforge_core::WifiSecurity::Wpa2,
            "WEP" => qrforge_core::WifiSecurity::Wep,
            "nopass" => qrforge_core::WifiSecurity::NoPass,
            other => return Err(format!("invalid security {other:?} (WPA, WPA2, WEP, nopass)")),
        };
        Ok(Self {
            ssid: args.ssid,
            password: args.password,
            security,
            hidden: args.hidden,
        })
    }
}
