//! Property tests for offset assignment and read-after-append.

use commitlog_core::{Log, LogConfig, LogError, Record, RecordLog};
use proptest::prelude::*;

fn payloads() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..64)
}

proptest! {
    #[test]
    fn sequential_appends_return_call_order_offsets(values in payloads()) {
        let log = Log::new(LogConfig::unbounded());
        for (i, value) in values.iter().enumerate() {
            let offset = log.append(Record::new(value.clone())).unwrap();
            prop_assert_eq!(offset, i as u64);
        }
        prop_assert_eq!(log.len(), values.len() as u64);
    }

    #[test]
    fn every_appended_record_reads_back_unchanged(values in payloads()) {
        let log = Log::default();
        for value in &values {
            log.append(Record::new(value.clone())).unwrap();
        }
        for (i, value) in values.iter().enumerate() {
            let record = log.read(i as u64).unwrap();
            prop_assert_eq!(&record.value, value);
            prop_assert_eq!(record.offset, i as u64);
        }
    }

    #[test]
    fn offsets_at_or_past_len_are_not_found(values in payloads(), extra in 0u64..1_000) {
        let log = Log::default();
        for value in &values {
            log.append(Record::new(value.clone())).unwrap();
        }
        let offset = values.len() as u64 + extra;
        prop_assert_eq!(log.read(offset), Err(LogError::OffsetNotFound { offset }));
    }

    #[test]
    fn later_appends_do_not_change_earlier_records(
        first in prop::collection::vec(any::<u8>(), 0..64),
        rest in payloads(),
    ) {
        let log = Log::default();
        let offset = log.append(Record::new(first.clone())).unwrap();
        let before = log.read(offset).unwrap();

        for value in rest {
            log.append(Record::new(value)).unwrap();
        }

        prop_assert_eq!(log.read(offset).unwrap(), before);
        prop_assert_eq!(log.read(offset).unwrap().value, first);
    }
}
