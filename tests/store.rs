mod tests {
    use myrtio_ws2812_dma::{ColorChannel, Error, LedStore, Rgb};

    #[test]
    fn test_new_store_is_dark_and_clean() {
        let store = LedStore::<8>::new(5).unwrap();
        assert_eq!(store.len(), 5);
        assert!(!store.is_dirty());
        assert!(store.leds().iter().all(|led| *led == Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_allocation_failure() {
        assert_eq!(
            LedStore::<4>::new(5).unwrap_err(),
            Error::Allocation {
                requested: 5,
                capacity: 4
            }
        );
        assert_eq!(
            LedStore::<4>::new(0).unwrap_err(),
            Error::Allocation {
                requested: 0,
                capacity: 4
            }
        );
        assert!(LedStore::<4>::new(4).is_ok());
    }

    #[test]
    fn test_set_value_per_channel() {
        let mut store = LedStore::<4>::new(4).unwrap();
        store.set_value(2, ColorChannel::Red, 1).unwrap();
        store.set_value(2, ColorChannel::Green, 2).unwrap();
        store.set_value(2, ColorChannel::Blue, 3).unwrap();
        assert_eq!(store.led(2), Some(Rgb::new(1, 2, 3)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_set_values() {
        let mut store = LedStore::<4>::new(3).unwrap();
        store.set_values(1, 10, 20, 30).unwrap();
        assert_eq!(store.led(1), Some(Rgb::new(10, 20, 30)));
        assert_eq!(store.led(0), Some(Rgb::new(0, 0, 0)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_out_of_range_is_a_clean_no_op() {
        let mut store = LedStore::<8>::new(3).unwrap();
        let before = store.leds().to_vec();

        assert_eq!(
            store.set_value(3, ColorChannel::Red, 5),
            Err(Error::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            store.set_values(3, 1, 2, 3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        );

        assert!(!store.is_dirty());
        assert_eq!(store.leds(), before.as_slice());
        assert_eq!(store.led(3), None);
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let mut store = LedStore::<4>::new(4).unwrap();
        store.set_values(0, 9, 9, 9).unwrap();
        store.set_values(3, 1, 1, 1).unwrap();

        store.clear_all();
        let once = store.leds().to_vec();
        store.clear_all();

        assert_eq!(store.leds(), once.as_slice());
        assert!(store.leds().iter().all(|led| *led == Rgb::default()));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_write_from_iterator() {
        let mut store = LedStore::<4>::new(3).unwrap();
        store
            .write_from([Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)])
            .unwrap();
        assert_eq!(store.led(0), Some(Rgb::new(1, 1, 1)));
        assert_eq!(store.led(1), Some(Rgb::new(2, 2, 2)));
        assert_eq!(store.led(2), Some(Rgb::new(0, 0, 0)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_write_too_long_writes_nothing() {
        let mut store = LedStore::<4>::new(2).unwrap();
        let result = store.write_from([(1, 1, 1), (2, 2, 2), (3, 3, 3)]);
        assert_eq!(result, Err(Error::OutOfRange { index: 2, len: 2 }));
        assert!(!store.is_dirty());
        assert!(store.leds().iter().all(|led| *led == Rgb::default()));
    }
}
