use crate::Mt19937;

const W: u32 = Mt19937::W;

/// Bit `i` of `x`, counting from the most significant bit (bit 0 is the
/// MSB). The bit is returned in place rather than normalised to 0 or 1.
pub fn get_bit(x: u32, i: u32) -> u32 {
    x & (1 << (W - 1 - i))
}

pub fn reverse_bits(x: u32) -> u32 {
    x.reverse_bits()
}

// Here we're reversing the operation:
//     y = x ^ ((x >> a) & b)
// Bitwise, with index 0 as the most significant bit, this is:
//     y[i] = x[i] ^ (x[i - a] & b[i])
// Shifting right by a leaves the top a bits zero, so
// for i < a:
//     x[i] = y[i]
// and, for i >= a:
//     x[i] = y[i] ^ (x[i - a] & b[i])
// where x[i - a] has already been recovered.
pub fn inv_right(y: u32, a: u32, b: u32) -> u32 {
    let mut x = 0;
    for i in 0..W {
        if i < a {
            x |= get_bit(y, i);
        } else {
            x |= get_bit(y, i) ^ ((get_bit(x, i - a) >> a) & get_bit(b, i));
        }
    }
    x
}

// A left shift in normal bit order is a right shift in reversed order.
pub fn inv_left(y: u32, a: u32, b: u32) -> u32 {
    reverse_bits(inv_right(reverse_bits(y), a, reverse_bits(b)))
}

/// Recover the raw state word that `Mt19937::temper` mixed into `y`.
pub fn untemper(y: u32) -> u32 {
    let mut x = inv_right(y, Mt19937::L, 0xffffffff);
    x = inv_left(x, Mt19937::T, Mt19937::C);
    x = inv_left(x, Mt19937::S, Mt19937::B);
    inv_right(x, Mt19937::U, Mt19937::D)
}
