//! Value objects nested inside APM requests and responses.

use common_enums::AutoSettleFlag;
use common_utils::types::MinorUnit;
use hyperswitch_masking::Secret;

/// Amount in minor units together with its ISO 4217 currency code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Amount {
    pub value: Option<MinorUnit>,
    pub currency: Option<String>,
}

impl Amount {
    pub fn new(value: impl Into<MinorUnit>, currency: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            currency: Some(currency.into()),
        }
    }

    pub fn with_value(mut self, value: impl Into<MinorUnit>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AutoSettle {
    pub flag: AutoSettleFlag,
}

impl AutoSettle {
    pub fn new(flag: AutoSettleFlag) -> Self {
        Self { flag }
    }
}

/// A free-text comment. The processor keeps at most two per transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Comment {
    pub id: u32,
    pub text: String,
}

impl Comment {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Ordered comments whose ids follow insertion order starting at 1.
///
/// [`CommentCollection::add`] always renumbers; collecting from an iterator keeps the
/// ids already present, which is how parsed messages are rebuilt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentCollection {
    comments: Vec<Comment>,
}

impl CommentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a comment, replacing whatever id it carried with the next position.
    /// Returns the id that was assigned.
    pub fn add(&mut self, mut comment: Comment) -> u32 {
        let id = self.next_id();
        comment.id = id;
        self.comments.push(comment);
        id
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> u32 {
        self.add(Comment::new(0, text))
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.comments.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }
}

impl FromIterator<Comment> for CommentCollection {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        Self {
            comments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CommentCollection {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BankAccount {
    pub iban: Option<Secret<String>>,
    pub bic: Option<String>,
}

impl BankAccount {
    pub fn with_iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(Secret::new(iban.into()));
        self
    }

    pub fn with_bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }
}

/// Scheme specific details of an alternative payment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PaymentMethodDetails {
    /// Where the customer lands after completing or abandoning the payment on the scheme's site.
    pub return_url: Option<String>,
    /// Only present on pending asynchronous responses; sends the customer back to an
    /// interrupted payment.
    pub redirect_url: Option<String>,
    /// Receives payment-status notifications, possibly days after authorisation.
    pub status_update_url: Option<String>,
    /// Dynamic per-transaction descriptor.
    pub descriptor: Option<String>,
    /// What the customer sees on their proof of payment.
    pub payment_purpose: Option<String>,
    /// ISO 3166-2 two character country code.
    pub country: Option<String>,
    pub account_holder_name: Option<Secret<String>>,
    pub bank_account: Option<BankAccount>,
}

impl PaymentMethodDetails {
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    pub fn with_status_update_url(mut self, status_update_url: impl Into<String>) -> Self {
        self.status_update_url = Some(status_update_url.into());
        self
    }

    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    pub fn with_payment_purpose(mut self, payment_purpose: impl Into<String>) -> Self {
        self.payment_purpose = Some(payment_purpose.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_account_holder_name(mut self, account_holder_name: impl Into<String>) -> Self {
        self.account_holder_name = Some(Secret::new(account_holder_name.into()));
        self
    }

    pub fn with_bank_account(mut self, bank_account: BankAccount) -> Self {
        self.bank_account = Some(bank_account);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn comment_ids_follow_insertion_order() {
        let mut comments = CommentCollection::new();
        comments.add(Comment::new(7, "first"));
        comments.add(Comment::new(7, "second"));
        comments.add_text("third");

        let ids: Vec<u32> = comments.iter().map(|comment| comment.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(comments.get(1).unwrap().text, "second");
    }

    #[test]
    fn collected_comments_keep_their_ids() {
        let comments: CommentCollection =
            [Comment::new(2, "b"), Comment::new(5, "e")].into_iter().collect();

        let ids: Vec<u32> = comments.iter().map(|comment| comment.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn adding_after_collect_continues_from_length() {
        let mut comments: CommentCollection = [Comment::new(9, "parsed")].into_iter().collect();
        assert_eq!(comments.add_text("next"), 2);
    }

    #[test]
    fn descriptor_is_independent_of_country() {
        let details = PaymentMethodDetails::default()
            .with_country("DE")
            .with_descriptor("Order 42");

        assert_eq!(details.country.as_deref(), Some("DE"));
        assert_eq!(details.descriptor.as_deref(), Some("Order 42"));
        assert_eq!(details.payment_purpose, None);
    }
}
