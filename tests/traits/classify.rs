use std::error::Error;
use std::fmt;

use error_class::traits::{AsClassify, Classify};
use error_class::{Classified, Kind, Metadata, NotAuthorized};

#[derive(Debug)]
enum CheckoutError {
    CardDeclined { last4: &'static str },
    CartEmpty,
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::CardDeclined { last4 } => write!(f, "card ending {last4} declined"),
            CheckoutError::CartEmpty => f.write_str("cart is empty"),
        }
    }
}

impl Error for CheckoutError {}

impl Classify for CheckoutError {
    fn code(&self) -> u16 {
        match self {
            CheckoutError::CardDeclined { .. } => 402,
            CheckoutError::CartEmpty => 400,
        }
    }

    fn kind(&self) -> Kind {
        match self {
            CheckoutError::CardDeclined { .. } => Kind::from_static("card_declined"),
            CheckoutError::CartEmpty => Kind::from_static("cart_empty"),
        }
    }

    fn message(&self) -> &str {
        match self {
            CheckoutError::CardDeclined { .. } => "Your card was declined.",
            CheckoutError::CartEmpty => "Your cart is empty.",
        }
    }

    fn metadata(&self) -> Option<&Metadata> {
        None
    }
}

#[test]
fn classified_type_is_always_viewable() {
    let err = CheckoutError::CardDeclined { last4: "4242" };
    let view = err.as_classify().expect("classified");
    assert_eq!(view.code(), 402);
    assert_eq!(view.kind(), "card_declined");
    assert_eq!(view.message(), "Your card was declined.");
}

#[test]
fn view_does_not_leak_display_text() {
    let err = CheckoutError::CardDeclined { last4: "4242" };
    let view = err.as_classify().expect("classified");
    assert!(!view.message().contains("4242"));
    assert!(err.to_string().contains("4242"));
}

#[test]
fn two_kinds_may_share_one_code() {
    let declined = CheckoutError::CardDeclined { last4: "0000" };
    let empty = CheckoutError::CartEmpty;
    assert_ne!(declined.kind(), empty.kind());
    assert_eq!(empty.code(), 400);

    let bad_request = Kind::from_static("bad_request");
    assert_ne!(bad_request, empty.kind());
}

#[test]
fn erased_errors_are_probed_by_downcast() {
    let carrier: Box<dyn Error + Send + Sync> =
        Box::new(Classified::new(CheckoutError::CartEmpty));
    assert_eq!((*carrier).as_classify().map(|c| c.code()), Some(400));

    let bare: Box<dyn Error + Send + Sync> = Box::new(CheckoutError::CartEmpty);
    assert!((*bare).as_classify().is_none());

    let builtin: Box<dyn Error> = Box::new(NotAuthorized::default());
    assert_eq!((*builtin).as_classify().map(|c| c.kind()), Some(Kind::NOT_AUTHORIZED));
}

#[test]
fn unclassified_std_errors_are_never_viewable() {
    assert!(fmt::Error.as_classify().is_none());
    assert!("nan?".parse::<f64>().unwrap_err().as_classify().is_none());
    assert!(std::str::from_utf8(&[0xff]).unwrap_err().as_classify().is_none());
    assert!(String::from_utf8(vec![0xff]).unwrap_err().as_classify().is_none());
}

#[test]
fn optional_errors_delegate_to_the_inner_value() {
    let err = CheckoutError::CartEmpty;
    assert!(Some(&err).as_classify().is_some());
    assert!(None::<&CheckoutError>.as_classify().is_none());

    let erased: &(dyn Error + 'static) = &NotAuthorized::default();
    assert!(Some(erased).as_classify().is_some());
}

#[test]
fn classify_is_object_safe() {
    let errors: Vec<Box<dyn Classify>> = vec![
        Box::new(CheckoutError::CartEmpty) as Box<dyn Classify>,
        Box::new(NotAuthorized::new("no")),
    ];
    let codes: Vec<u16> = errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec![400, 403]);
}

#[test]
fn boxed_errors_are_viewable_without_reborrow() {
    let carrier: Box<dyn Error + Send + Sync> = Box::new(Classified::new(CheckoutError::CartEmpty));
    assert_eq!(carrier.as_classify().map(|c| c.code()), Some(400));

    let local: Box<dyn Error> = Box::new(NotAuthorized::default());
    assert_eq!(local.as_classify().map(|c| c.kind()), Some(Kind::NOT_AUTHORIZED));

    let bare: Box<dyn Error + Send> = Box::new(CheckoutError::CartEmpty);
    assert!(bare.as_classify().is_none());
}

#[test]
fn conversion_errors_are_never_viewable() {
    assert!(u8::try_from(300i32).unwrap_err().as_classify().is_none());
    assert!("maybe".parse::<bool>().unwrap_err().as_classify().is_none());
    assert!("ab".parse::<char>().unwrap_err().as_classify().is_none());
    assert!(char::try_from(0xD800u32).unwrap_err().as_classify().is_none());
    assert!(<[u8; 4]>::try_from(&[1u8, 2][..]).unwrap_err().as_classify().is_none());
    assert!(String::from_utf16(&[0xD800]).unwrap_err().as_classify().is_none());
}

#[cfg(feature = "std")]
#[test]
fn std_env_errors_are_never_viewable() {
    let missing = std::env::var("ERROR_CLASS_UNSET_VARIABLE").unwrap_err();
    assert!(missing.as_classify().is_none());
}

#[test]
fn foreign_errors_are_probed_as_trait_objects() {
    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out")
        }
    }

    impl Error for Timeout {}

    let erased: &(dyn Error + 'static) = &Timeout;
    assert!(erased.as_classify().is_none());
}
