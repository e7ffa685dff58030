//! Line-oriented console front end over a [`StorefrontSession`].
//!
//! Each input line is one UI event (`search`, `add`, `remove`, ...). Output is plain
//! text written to any `io::Write`, which keeps the loop testable.

use std::io::{BufRead, Write};

use luxor_core::ProductId;

use crate::checkout::{CheckoutGateway, CheckoutOutcome};
use crate::config::StoreConfig;
use crate::contact::ContactLinks;
use crate::error::{StorefrontError, StorefrontResult};
use crate::format::format_price;
use crate::newsletter::{NewsletterGateway, SubscriptionStatus};
use crate::session::StorefrontSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    /// `search` with no text clears the filter.
    Search(String),
    List,
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Checkout,
    Contact(Option<ProductId>),
    Subscribe(String),
    Reset,
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> StorefrontResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let required = |usage: &'static str| -> StorefrontResult<String> {
            if rest.is_empty() {
                return Err(StorefrontError::MissingArgument { usage });
            }
            Ok(rest.to_string())
        };

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "search" => Self::Search(rest.to_string()),
            "list" | "ls" => Self::List,
            "add" => Self::Add(ProductId::new(required("add <product-id>")?)),
            "remove" | "rm" => Self::Remove(ProductId::new(required("remove <product-id>")?)),
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "contact" => Self::Contact((!rest.is_empty()).then(|| ProductId::new(rest))),
            "subscribe" => Self::Subscribe(required("subscribe <email>")?),
            "reset" => Self::Reset,
            "quit" | "exit" => Self::Quit,
            other => return Err(StorefrontError::UnknownCommand(other.to_string())),
        };
        Ok(Some(cmd))
    }
}

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Console<C, N> {
    session: StorefrontSession,
    config: StoreConfig,
    checkout: C,
    newsletter: N,
}

impl<C, N> Console<C, N>
where
    C: CheckoutGateway,
    N: NewsletterGateway,
{
    pub fn new(session: StorefrontSession, config: StoreConfig, checkout: C, newsletter: N) -> Self {
        Self {
            session,
            config,
            checkout,
            newsletter,
        }
    }

    pub fn session(&self) -> &StorefrontSession {
        &self.session
    }

    /// Read commands until EOF or `quit`. Command errors are reported and the loop continues.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> StorefrontResult<()> {
        writeln!(out, "{} — type `help` for commands", self.config.store_name)?;
        for line in input.lines() {
            let line = line?;
            let flow = match ConsoleCommand::parse(&line) {
                Ok(Some(cmd)) => match self.execute(cmd, out) {
                    Ok(flow) => flow,
                    Err(StorefrontError::Io(e)) => return Err(StorefrontError::Io(e)),
                    Err(e) => {
                        writeln!(out, "error: {e}")?;
                        Flow::Continue
                    }
                },
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Stop {
                break;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, cmd: ConsoleCommand, out: &mut impl Write) -> StorefrontResult<Flow> {
        match cmd {
            ConsoleCommand::Help => {
                writeln!(
                    out,
                    "commands: search [text] | list | add <id> | remove <id> | cart | checkout | \
                     contact [id] | subscribe <email> | reset | quit"
                )?;
            }
            ConsoleCommand::Search(text) => {
                self.session.set_search(text);
                self.print_products(out)?;
            }
            ConsoleCommand::List => self.print_products(out)?,
            ConsoleCommand::Add(id) => {
                let qty = self.session.add_to_cart(&id);
                writeln!(out, "{id}: {qty} in cart")?;
                self.print_badge(out)?;
            }
            ConsoleCommand::Remove(id) => {
                if !self.session.cart().contains(&id) {
                    writeln!(out, "{id}: not in cart")?;
                    return Ok(Flow::Continue);
                }
                match self.session.remove_from_cart(&id) {
                    0 => writeln!(out, "{id}: removed from cart")?,
                    qty => writeln!(out, "{id}: {qty} in cart")?,
                }
                self.print_badge(out)?;
            }
            ConsoleCommand::Cart => self.print_cart(out)?,
            ConsoleCommand::Checkout => {
                let request = self.session.checkout_request(&self.config.currency_code)?;
                match self.checkout.begin_checkout(&request)? {
                    CheckoutOutcome::NotConfigured { instructions } => {
                        writeln!(out, "Demo checkout")?;
                        for step in instructions {
                            writeln!(out, "  • {step}")?;
                        }
                    }
                    CheckoutOutcome::Redirect { url } => writeln!(out, "Continue at {url}")?,
                }
            }
            ConsoleCommand::Contact(product) => {
                let links = ContactLinks::new(&self.config);
                match product {
                    Some(id) => match self.session.catalog().get(&id) {
                        Some(p) => writeln!(out, "{}", links.whatsapp_inquiry(p)?)?,
                        None => writeln!(out, "{id}: no such product")?,
                    },
                    None => {
                        writeln!(out, "WhatsApp:  {}", links.whatsapp_purchase()?)?;
                        writeln!(out, "Instagram: {}", links.instagram()?)?;
                        writeln!(out, "Email:     {}", links.email()?)?;
                    }
                }
            }
            ConsoleCommand::Subscribe(email) => match self.newsletter.subscribe(&email)? {
                SubscriptionStatus::Pending { notice, .. } => writeln!(out, "{notice}")?,
                SubscriptionStatus::Subscribed { email } => writeln!(out, "{email} subscribed")?,
            },
            ConsoleCommand::Reset => {
                self.session.reset();
                writeln!(out, "cart emptied")?;
            }
            ConsoleCommand::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    fn print_products(&self, out: &mut impl Write) -> StorefrontResult<()> {
        let products = self.session.visible_products();
        if products.is_empty() {
            writeln!(out, "no watches match `{}`", self.session.search_text().trim())?;
        }
        for p in products {
            writeln!(
                out,
                "{:<18} {:<40} {:>16}  [{}]",
                p.id_typed(),
                p.display_name(),
                format_price(p.price(), &self.config),
                p.tags().join(", ")
            )?;
        }
        Ok(())
    }

    fn print_cart(&self, out: &mut impl Write) -> StorefrontResult<()> {
        let lines = self.session.cart_lines();
        if lines.is_empty() {
            writeln!(out, "Your cart is empty.")?;
            return Ok(());
        }
        for line in &lines {
            writeln!(
                out,
                "{} — {}  Qty: {}  {}",
                line.product.brand(),
                line.product.name(),
                line.quantity,
                format_price(line.line_total, &self.config)
            )?;
        }
        writeln!(
            out,
            "Subtotal: {}",
            format_price(self.session.subtotal(), &self.config)
        )?;
        Ok(())
    }

    fn print_badge(&self, out: &mut impl Write) -> StorefrontResult<()> {
        match self.session.cart_badge() {
            Some(n) => writeln!(out, "Cart ({n})")?,
            None => writeln!(out, "Cart")?,
        }
        Ok(())
    }
}
