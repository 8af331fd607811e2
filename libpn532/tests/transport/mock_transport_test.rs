use libpn532::transport::Transport;
use libpn532::transport::mock::MockTransport;

#[test]
fn shared_handle_sees_device_side_writes() {
    let mock = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(mock.clone());

    boxed.write(&[0x00, 0x00, 0xFF]).unwrap();
    mock.push_read(vec![0x01, 0x02, 0x03]);
    assert_eq!(boxed.read(3).unwrap(), vec![0x01, 0x02, 0x03]);

    assert_eq!(mock.writes(), vec![vec![0x00, 0x00, 0xFF]]);
    assert_eq!(mock.transactions(), 2);
    assert_eq!(mock.pending_reads(), 0);
}

#[test]
fn status_script_drives_probe() {
    let mut mock = MockTransport::new();
    mock.push_status(0x00);
    mock.push_status(0x01);
    assert_eq!(mock.probe_status().unwrap(), 0x00);
    assert_eq!(mock.probe_status().unwrap(), 0x01);
}
