use crate::domain::ports::ValueSource;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ACCOUNT_KINDS: [&str; 8] = [
    "Checking",
    "Savings",
    "Money Market",
    "Credit Card",
    "Auto Loan",
    "Home Loan",
    "Personal Loan",
    "Investment",
];

/// `ValueSource` backed by the fake crate. OS-seeded by default; pass a
/// fixed seed to make a run reproducible.
pub struct FakeValueSource {
    rng: ChaCha8Rng,
}

impl FakeValueSource {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for FakeValueSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for FakeValueSource {
    fn account_name(&mut self) -> String {
        let kind = ACCOUNT_KINDS[self.rng.random_range(0..ACCOUNT_KINDS.len())];
        format!("{} Account", kind)
    }

    fn account_number(&mut self) -> String {
        NumberWithFormat("########").fake_with_rng(&mut self.rng)
    }

    fn amount(&mut self) -> String {
        format!("{:.2}", self.rng.random_range(0.0..1000.0f64))
    }

    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn email(&mut self, first_name: &str) -> String {
        let last_name: String = LastName().fake_with_rng(&mut self.rng);
        let provider: String = FreeEmailProvider().fake_with_rng(&mut self.rng);
        format!(
            "{}.{}@{}",
            mailbox_part(first_name),
            mailbox_part(&last_name),
            provider
        )
    }
}

// names like O'Kon need cleaning before they go into a mailbox
fn mailbox_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}
