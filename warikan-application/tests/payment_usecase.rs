use rstest::{fixture, rstest};
use warikan_application::{
    CommandParseError, MessageProcessor, PayerRepository, PaymentRepository, PaymentUsecase,
    ProcessError, ProcessingOutcome, UsecaseError,
};
use warikan_domain::{EventId, PayerId, Payment, SettlementError, Transfer, Yen};
use warikan_infrastructure::{InMemoryStore, WarikanCommandParser};

static TEST_PARSER: WarikanCommandParser = WarikanCommandParser;

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new()
}

fn usecase(store: &InMemoryStore) -> PaymentUsecase<'_> {
    PaymentUsecase::new(store, store, store)
}

fn processor(store: &InMemoryStore) -> MessageProcessor<'_> {
    MessageProcessor::new(&TEST_PARSER, usecase(store))
}

fn yen(amount: i64) -> Yen {
    Yen::new(amount).expect("valid amount")
}

fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
    Transfer {
        from: PayerId::new(from),
        to: PayerId::new(to),
        amount: yen(amount),
    }
}

fn pay(store: &InMemoryStore, event: &str, payer: &str, amount: i64) -> Payment {
    usecase(store)
        .create(EventId::new(event), PayerId::new(payer), yen(amount))
        .expect("payment is recorded")
}

fn expect_payment(outcome: ProcessingOutcome) -> Payment {
    match outcome {
        ProcessingOutcome::PaymentRegistered(payment) => payment,
        other => panic!("expected a registered payment, got {other:?}"),
    }
}

#[rstest]
fn create_enrolls_payer_and_event(store: InMemoryStore) {
    let payment = pay(&store, "C1", "U1", 1000);

    assert_eq!(payment.amount, yen(1000));
    assert!(store.contains_event(&EventId::new("C1")));
    let payers = PayerRepository::find_by_event(&store, &EventId::new("C1")).expect("lookup");
    assert_eq!(payers.len(), 1);
    assert_eq!(payers[0].id, PayerId::new("U1"));
}

#[rstest]
fn repeated_payments_keep_a_single_enrollment(store: InMemoryStore) {
    pay(&store, "C1", "U1", 1000);
    pay(&store, "C1", "U1", 500);

    let payers = PayerRepository::find_by_event(&store, &EventId::new("C1")).expect("lookup");
    let payments = PaymentRepository::find_by_event(&store, &EventId::new("C1")).expect("lookup");
    assert_eq!(payers.len(), 1);
    assert_eq!(payments.len(), 2);
}

#[rstest]
#[case::unknown_event("", "U1", UsecaseError::UnknownEvent)]
#[case::unknown_payer("C1", "", UsecaseError::UnknownPayer)]
fn create_rejects_unknown_ids(
    store: InMemoryStore,
    #[case] event: &str,
    #[case] payer: &str,
    #[case] expected: UsecaseError,
) {
    let result = usecase(&store).create(EventId::new(event), PayerId::new(payer), yen(100));

    assert_eq!(result, Err(expected));
    assert!(
        PaymentRepository::find_by_event(&store, &EventId::new(event))
            .expect("lookup")
            .is_empty()
    );
}

#[rstest]
fn two_members_settle_with_one_transfer(store: InMemoryStore) {
    usecase(&store)
        .join(EventId::new("C1"), PayerId::new("B"))
        .expect("join");
    pay(&store, "C1", "A", 1000);

    let settlement = usecase(&store)
        .settle(&EventId::new("C1"))
        .expect("settles");

    assert_eq!(settlement.total, yen(1000));
    assert_eq!(settlement.instructions, vec![transfer("B", "A", 500)]);
}

#[rstest]
fn three_members_with_uneven_share(store: InMemoryStore) {
    for member in ["B", "C"] {
        usecase(&store)
            .join(EventId::new("C1"), PayerId::new(member))
            .expect("join");
    }
    pay(&store, "C1", "A", 100);

    let settlement = usecase(&store)
        .settle(&EventId::new("C1"))
        .expect("settles");

    assert_eq!(settlement.total, yen(100));
    assert_eq!(
        settlement.instructions,
        vec![transfer("B", "A", 34), transfer("C", "A", 34)]
    );
}

#[rstest]
fn events_do_not_share_payments(store: InMemoryStore) {
    usecase(&store)
        .join(EventId::new("C1"), PayerId::new("B"))
        .expect("join");
    pay(&store, "C1", "A", 1000);
    pay(&store, "C2", "B", 9000);

    let settlement = usecase(&store)
        .settle(&EventId::new("C1"))
        .expect("settles");

    assert_eq!(settlement.total, yen(1000));
    assert_eq!(settlement.instructions, vec![transfer("B", "A", 500)]);
}

#[rstest]
fn settling_an_empty_event_reports_no_participants(store: InMemoryStore) {
    let result = usecase(&store).settle(&EventId::new("C1"));

    assert_eq!(
        result,
        Err(UsecaseError::Settlement(SettlementError::NoParticipants))
    );
}

#[rstest]
fn deleted_payment_no_longer_counts(store: InMemoryStore) {
    usecase(&store)
        .join(EventId::new("C1"), PayerId::new("B"))
        .expect("join");
    let mistake = pay(&store, "C1", "A", 5000);
    pay(&store, "C1", "A", 1000);

    let deleted = usecase(&store)
        .delete(&EventId::new("C1"), mistake.id)
        .expect("delete");
    assert!(deleted);
    let settlement = usecase(&store)
        .settle(&EventId::new("C1"))
        .expect("settles");

    assert_eq!(settlement.total, yen(1000));
    assert_eq!(settlement.instructions, vec![transfer("B", "A", 500)]);
}

#[rstest]
fn processor_registers_payments(store: InMemoryStore) {
    let outcome = processor(&store)
        .process(EventId::new("C1"), PayerId::new("U1"), "ランチ 1,200円")
        .expect("processed");

    let payment = expect_payment(outcome);
    assert_eq!(payment.amount, yen(1200));
    assert_eq!(payment.payer_id, PayerId::new("U1"));
}

#[rstest]
fn processor_reports_repeated_join(store: InMemoryStore) {
    let processor = processor(&store);

    let first = processor
        .process(EventId::new("C1"), PayerId::new("U1"), "参加")
        .expect("processed");
    let second = processor
        .process(EventId::new("C1"), PayerId::new("U1"), "join")
        .expect("processed");

    assert!(matches!(first, ProcessingOutcome::Joined(ref payer) if payer.id == PayerId::new("U1")));
    assert_eq!(second, ProcessingOutcome::AlreadyJoined(PayerId::new("U1")));
}

#[rstest]
fn processor_settles_and_deletes(store: InMemoryStore) {
    let processor = processor(&store);
    processor
        .process(EventId::new("C1"), PayerId::new("B"), "join")
        .expect("join");
    let payment = expect_payment(
        processor
            .process(EventId::new("C1"), PayerId::new("A"), "3000")
            .expect("pay"),
    );

    let deleted = processor
        .process(
            EventId::new("C1"),
            PayerId::new("A"),
            &format!("delete {}", payment.id),
        )
        .expect("delete");
    assert_eq!(deleted, ProcessingOutcome::PaymentDeleted(payment.id));

    let settled = processor
        .process(EventId::new("C1"), PayerId::new("A"), "settle")
        .expect("settle");
    match settled {
        ProcessingOutcome::Settled(settlement) => {
            assert_eq!(settlement.total, Yen::ZERO);
            assert!(settlement.instructions.is_empty());
        }
        other => panic!("expected a settlement, got {other:?}"),
    }
}

#[rstest]
fn payments_cannot_be_deleted_from_another_event(store: InMemoryStore) {
    let processor = processor(&store);
    processor
        .process(EventId::new("C1"), PayerId::new("B"), "join")
        .expect("join");
    let payment = expect_payment(
        processor
            .process(EventId::new("C1"), PayerId::new("A"), "1000")
            .expect("pay"),
    );

    let outcome = processor
        .process(
            EventId::new("C2"),
            PayerId::new("M"),
            &format!("delete {}", payment.id),
        )
        .expect("processed");
    assert_eq!(outcome, ProcessingOutcome::PaymentNotFound(payment.id));

    let settlement = usecase(&store)
        .settle(&EventId::new("C1"))
        .expect("settles");
    assert_eq!(settlement.total, yen(1000));
    assert_eq!(settlement.instructions, vec![transfer("B", "A", 500)]);
}

#[rstest]
fn deleting_an_unknown_payment_reports_not_found(store: InMemoryStore) {
    let missing = warikan_domain::PaymentId::new();

    let outcome = processor(&store)
        .process(
            EventId::new("C1"),
            PayerId::new("A"),
            &format!("delete {missing}"),
        )
        .expect("processed");

    assert_eq!(outcome, ProcessingOutcome::PaymentNotFound(missing));
}

#[rstest]
#[case::help("help", Ok(ProcessingOutcome::Help))]
#[case::unknown(
    "hello",
    Err(ProcessError::Parse(CommandParseError::InvalidArgument("hello".to_string())))
)]
#[case::bad_payment_id(
    "delete not-a-uuid",
    Err(ProcessError::InvalidPaymentId("not-a-uuid".to_string()))
)]
#[case::settle_without_members(
    "settle",
    Err(ProcessError::Usecase(UsecaseError::Settlement(SettlementError::NoParticipants)))
)]
fn processor_outcomes(
    store: InMemoryStore,
    #[case] text: &str,
    #[case] expected: Result<ProcessingOutcome, ProcessError>,
) {
    let result = processor(&store).process(EventId::new("C1"), PayerId::new("U1"), text);

    assert_eq!(result, expected);
}
