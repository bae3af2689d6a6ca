/// CRC-8 generator polynomial (x^8 + x^2 + x + 1)
const CRC8_POLY: u8 = 0x07;

/// Bitwise CRC-8: MSB first, initial value 0, no final XOR.
///
/// ```
/// use cardano_value_codec::asset_name::crc8;
///
/// assert_eq!(crc8(b"123456789"), 0xf4);
/// assert_eq!(crc8(&[0x00, 0xde]), 0x14);
/// ```
pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |crc, &byte| {
        (0..8).fold(crc ^ byte, |c, _| {
            if c & 0x80 != 0 {
                (c << 1) ^ CRC8_POLY
            } else {
                c << 1
            }
        })
    })
}
