//! Property tests for the totals engine and the update planner.

use chrono::{TimeZone, Utc};
use invoicing_service::engine::{assemble_invoice_at, compute_totals, plan_update};
use invoicing_service::models::{
    Customer, Invoice, InvoiceDraft, InvoicePatch, LineItem, ServiceCharge,
};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

fn money_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_00).prop_map(|paise| Decimal::new(paise, 2))
}

fn tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    ("[A-Za-z ]{1,24}", 1i64..1_000, money_strategy(), money_strategy()).prop_map(
        |(description, quantity, rate, amount)| LineItem {
            description,
            hsn_sac: "998313".to_string(),
            quantity,
            rate,
            amount,
        },
    )
}

fn line_items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(line_item_strategy(), 0..12)
}

fn service_charge_strategy() -> impl Strategy<Value = ServiceCharge> {
    (money_strategy(), tax_rate_strategy(), tax_rate_strategy(), money_strategy()).prop_map(
        |(amount, cgst_rate, sgst_rate, stale)| ServiceCharge {
            description: "Platform Service Charges".to_string(),
            hsn_sac: "998314".to_string(),
            amount,
            cgst_rate,
            sgst_rate,
            cgst_amount: stale,
            sgst_amount: stale,
            total_gst: stale,
        },
    )
}

fn header_patch_strategy() -> impl Strategy<Value = InvoicePatch> {
    (
        proptest::option::of("[A-Z]{3}-[0-9]{4}"),
        proptest::option::of("(Net [0-9]{2}|Due on receipt)"),
        proptest::option::of("PO-[0-9]{6}"),
        proptest::option::of("[A-Za-z]{4,12} \\([0-9]{2}\\)"),
        proptest::option::of("[a-z ]{0,40}"),
    )
        .prop_map(
            |(invoice_number, payment_terms, po_number, place_of_supply, notes)| InvoicePatch {
                invoice_number,
                payment_terms,
                po_number,
                place_of_supply,
                notes,
                ..InvoicePatch::default()
            },
        )
}

fn half_of_tax(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn issued_invoice(line_items: Vec<LineItem>, charge: ServiceCharge) -> Invoice {
    let draft = InvoiceDraft {
        invoice_number: "INV-2026-0100".to_string(),
        invoice_date: None,
        due_date: Utc.with_ymd_and_hms(2026, 11, 18, 0, 0, 0).unwrap(),
        payment_terms: "30 days".to_string(),
        po_number: None,
        place_of_supply: "Maharashtra (27)".to_string(),
        customer: Customer {
            name: "ABC Corporation Ltd".to_string(),
            address_line1: "456 Corporate Avenue".to_string(),
            address_line2: None,
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: "411001".to_string(),
            country: "India".to_string(),
            gstin: Some("27XYZAB1234C1Z5".to_string()),
            phone: None,
            email: None,
        },
        line_items,
        service_charges: charge,
        terms_conditions: None,
        notes: None,
    };
    assemble_invoice_at(draft, Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn subtotal_is_the_sum_of_line_amounts(
        items in line_items_strategy(),
        charge in service_charge_strategy(),
    ) {
        let (totals, _) = compute_totals(&items, &charge).unwrap();
        let expected: Decimal = items.iter().map(|item| item.amount).sum();
        prop_assert_eq!(totals.subtotal, expected);
    }

    #[test]
    fn grand_total_adds_up(
        items in line_items_strategy(),
        charge in service_charge_strategy(),
    ) {
        let (totals, output) = compute_totals(&items, &charge).unwrap();

        prop_assert_eq!(totals.service_charge, charge.amount);
        prop_assert_eq!(
            totals.grand_total,
            totals.subtotal + totals.service_charge + totals.total_gst
        );
        prop_assert_eq!(totals.total_gst, totals.total_cgst + totals.total_sgst);
        prop_assert_eq!(output.total_gst, output.cgst_amount + output.sgst_amount);
    }

    #[test]
    fn each_tax_half_is_rounded_to_paise(
        items in line_items_strategy(),
        charge in service_charge_strategy(),
    ) {
        let (totals, output) = compute_totals(&items, &charge).unwrap();

        let cgst = half_of_tax(charge.amount, charge.cgst_rate);
        let sgst = half_of_tax(charge.amount, charge.sgst_rate);
        prop_assert_eq!(output.cgst_amount, cgst);
        prop_assert_eq!(output.sgst_amount, sgst);
        prop_assert_eq!(totals.total_cgst, cgst);
        prop_assert_eq!(totals.total_sgst, sgst);
    }

    #[test]
    fn totals_are_deterministic(
        items in line_items_strategy(),
        charge in service_charge_strategy(),
    ) {
        let first = compute_totals(&items, &charge).unwrap();
        let second = compute_totals(&items, &charge).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn header_patch_keeps_totals(
        items in line_items_strategy(),
        charge in service_charge_strategy(),
        patch in header_patch_strategy(),
    ) {
        let existing = issued_invoice(items, charge);
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();

        let plan = plan_update(&existing, patch, now).unwrap();

        prop_assert!(!plan.recomputed);
        prop_assert_eq!(
            serde_json::to_string(&plan.invoice.totals).unwrap(),
            serde_json::to_string(&existing.totals).unwrap()
        );
        prop_assert_eq!(&plan.invoice.service_charges, &existing.service_charges);
        prop_assert_eq!(&plan.invoice.line_items, &existing.line_items);
    }

    #[test]
    fn line_item_patch_matches_a_fresh_computation(
        items in line_items_strategy(),
        charge in service_charge_strategy(),
        replacement in line_items_strategy(),
    ) {
        let existing = issued_invoice(items, charge);
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let patch = InvoicePatch {
            line_items: Some(replacement.clone()),
            ..InvoicePatch::default()
        };

        let plan = plan_update(&existing, patch, now).unwrap();
        let (expected, _) = compute_totals(&replacement, &existing.service_charges).unwrap();

        prop_assert_eq!(plan.invoice.totals, expected);
        prop_assert_eq!(plan.invoice.created_at, existing.created_at);
    }
}
