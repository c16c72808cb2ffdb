use crate::disassembler::{addressing::AddressingMode::*, opcodes::OpcodeSpec};

/// The documented 6502 instruction set. Undocumented opcodes are left unmapped.
pub static MOS6502_OPCODES: &[OpcodeSpec] = &[
    OpcodeSpec::new(0x00, *b"BRK", Implied),
    OpcodeSpec::new(0x01, *b"ORA", IndirectX),
    OpcodeSpec::new(0x05, *b"ORA", ZeroPage),
    OpcodeSpec::new(0x06, *b"ASL", ZeroPage),
    OpcodeSpec::new(0x08, *b"PHP", Implied),
    OpcodeSpec::new(0x09, *b"ORA", Immediate),
    OpcodeSpec::new(0x0A, *b"ASL", Accumulator),
    OpcodeSpec::new(0x0D, *b"ORA", Absolute),
    OpcodeSpec::new(0x0E, *b"ASL", Absolute),
    OpcodeSpec::new(0x10, *b"BPL", Relative),
    OpcodeSpec::new(0x11, *b"ORA", IndirectY),
    OpcodeSpec::new(0x15, *b"ORA", ZeroPageX),
    OpcodeSpec::new(0x16, *b"ASL", ZeroPageX),
    OpcodeSpec::new(0x18, *b"CLC", Implied),
    OpcodeSpec::new(0x19, *b"ORA", AbsoluteY),
    OpcodeSpec::new(0x1D, *b"ORA", AbsoluteX),
    OpcodeSpec::new(0x1E, *b"ASL", AbsoluteX),
    OpcodeSpec::new(0x20, *b"JSR", Absolute),
    OpcodeSpec::new(0x21, *b"AND", IndirectX),
    OpcodeSpec::new(0x24, *b"BIT", ZeroPage),
    OpcodeSpec::new(0x25, *b"AND", ZeroPage),
    OpcodeSpec::new(0x26, *b"ROL", ZeroPage),
    OpcodeSpec::new(0x28, *b"PLP", Implied),
    OpcodeSpec::new(0x29, *b"AND", Immediate),
    OpcodeSpec::new(0x2A, *b"ROL", Accumulator),
    OpcodeSpec::new(0x2C, *b"BIT", Absolute),
    OpcodeSpec::new(0x2D, *b"AND", Absolute),
    OpcodeSpec::new(0x2E, *b"ROL", Absolute),
    OpcodeSpec::new(0x30, *b"BMI", Relative),
    OpcodeSpec::new(0x31, *b"AND", IndirectY),
    OpcodeSpec::new(0x35, *b"AND", ZeroPageX),
    OpcodeSpec::new(0x36, *b"ROL", ZeroPageX),
    OpcodeSpec::new(0x38, *b"SEC", Implied),
    OpcodeSpec::new(0x39, *b"AND", AbsoluteY),
    OpcodeSpec::new(0x3D, *b"AND", AbsoluteX),
    OpcodeSpec::new(0x3E, *b"ROL", AbsoluteX),
    OpcodeSpec::new(0x40, *b"RTI", Implied),
    OpcodeSpec::new(0x41, *b"EOR", IndirectX),
    OpcodeSpec::new(0x45, *b"EOR", ZeroPage),
    OpcodeSpec::new(0x46, *b"LSR", ZeroPage),
    OpcodeSpec::new(0x48, *b"PHA", Implied),
    OpcodeSpec::new(0x49, *b"EOR", Immediate),
    OpcodeSpec::new(0x4A, *b"LSR", Accumulator),
    OpcodeSpec::new(0x4C, *b"JMP", Absolute),
    OpcodeSpec::new(0x4D, *b"EOR", Absolute),
    OpcodeSpec::new(0x4E, *b"LSR", Absolute),
    OpcodeSpec::new(0x50, *b"BVC", Relative),
    OpcodeSpec::new(0x51, *b"EOR", IndirectY),
    OpcodeSpec::new(0x55, *b"EOR", ZeroPageX),
    OpcodeSpec::new(0x56, *b"LSR", ZeroPageX),
    OpcodeSpec::new(0x58, *b"CLI", Implied),
    OpcodeSpec::new(0x59, *b"EOR", AbsoluteY),
    OpcodeSpec::new(0x5D, *b"EOR", AbsoluteX),
    OpcodeSpec::new(0x5E, *b"LSR", AbsoluteX),
    OpcodeSpec::new(0x60, *b"RTS", Implied),
    OpcodeSpec::new(0x61, *b"ADC", IndirectX),
    OpcodeSpec::new(0x65, *b"ADC", ZeroPage),
    OpcodeSpec::new(0x66, *b"ROR", ZeroPage),
    OpcodeSpec::new(0x68, *b"PLA", Implied),
    OpcodeSpec::new(0x69, *b"ADC", Immediate),
    OpcodeSpec::new(0x6A, *b"ROR", Accumulator),
    OpcodeSpec::new(0x6C, *b"JMP", Indirect),
    OpcodeSpec::new(0x6D, *b"ADC", Absolute),
    OpcodeSpec::new(0x6E, *b"ROR", Absolute),
    OpcodeSpec::new(0x70, *b"BVS", Relative),
    OpcodeSpec::new(0x71, *b"ADC", IndirectY),
    OpcodeSpec::new(0x75, *b"ADC", ZeroPageX),
    OpcodeSpec::new(0x76, *b"ROR", ZeroPageX),
    OpcodeSpec::new(0x78, *b"SEI", Implied),
    OpcodeSpec::new(0x79, *b"ADC", AbsoluteY),
    OpcodeSpec::new(0x7D, *b"ADC", AbsoluteX),
    OpcodeSpec::new(0x7E, *b"ROR", AbsoluteX),
    OpcodeSpec::new(0x81, *b"STA", IndirectX),
    OpcodeSpec::new(0x84, *b"STY", ZeroPage),
    OpcodeSpec::new(0x85, *b"STA", ZeroPage),
    OpcodeSpec::new(0x86, *b"STX", ZeroPage),
    OpcodeSpec::new(0x88, *b"DEY", Implied),
    OpcodeSpec::new(0x8A, *b"TXA", Implied),
    OpcodeSpec::new(0x8C, *b"STY", Absolute),
    OpcodeSpec::new(0x8D, *b"STA", Absolute),
    OpcodeSpec::new(0x8E, *b"STX", Absolute),
    OpcodeSpec::new(0x90, *b"BCC", Relative),
    OpcodeSpec::new(0x91, *b"STA", IndirectY),
    OpcodeSpec::new(0x94, *b"STY", ZeroPageX),
    OpcodeSpec::new(0x95, *b"STA", ZeroPageX),
    OpcodeSpec::new(0x96, *b"STX", ZeroPageY),
    OpcodeSpec::new(0x98, *b"TYA", Implied),
    OpcodeSpec::new(0x99, *b"STA", AbsoluteY),
    OpcodeSpec::new(0x9A, *b"TXS", Implied),
    OpcodeSpec::new(0x9D, *b"STA", AbsoluteX),
    OpcodeSpec::new(0xA0, *b"LDY", Immediate),
    OpcodeSpec::new(0xA1, *b"LDA", IndirectX),
    OpcodeSpec::new(0xA2, *b"LDX", Immediate),
    OpcodeSpec::new(0xA4, *b"LDY", ZeroPage),
    OpcodeSpec::new(0xA5, *b"LDA", ZeroPage),
    OpcodeSpec::new(0xA6, *b"LDX", ZeroPage),
    OpcodeSpec::new(0xA8, *b"TAY", Implied),
    OpcodeSpec::new(0xA9, *b"LDA", Immediate),
    OpcodeSpec::new(0xAA, *b"TAX", Implied),
    OpcodeSpec::new(0xAC, *b"LDY", Absolute),
    OpcodeSpec::new(0xAD, *b"LDA", Absolute),
    OpcodeSpec::new(0xAE, *b"LDX", Absolute),
    OpcodeSpec::new(0xB0, *b"BCS", Relative),
    OpcodeSpec::new(0xB1, *b"LDA", IndirectY),
    OpcodeSpec::new(0xB4, *b"LDY", ZeroPageX),
    OpcodeSpec::new(0xB5, *b"LDA", ZeroPageX),
    OpcodeSpec::new(0xB6, *b"LDX", ZeroPageY),
    OpcodeSpec::new(0xB8, *b"CLV", Implied),
    OpcodeSpec::new(0xB9, *b"LDA", AbsoluteY),
    OpcodeSpec::new(0xBA, *b"TSX", Implied),
    OpcodeSpec::new(0xBC, *b"LDY", AbsoluteX),
    OpcodeSpec::new(0xBD, *b"LDA", AbsoluteX),
    OpcodeSpec::new(0xBE, *b"LDX", AbsoluteY),
    OpcodeSpec::new(0xC0, *b"CPY", Immediate),
    OpcodeSpec::new(0xC1, *b"CMP", IndirectX),
    OpcodeSpec::new(0xC4, *b"CPY", ZeroPage),
    OpcodeSpec::new(0xC5, *b"CMP", ZeroPage),
    OpcodeSpec::new(0xC6, *b"DEC", ZeroPage),
    OpcodeSpec::new(0xC8, *b"INY", Implied),
    OpcodeSpec::new(0xC9, *b"CMP", Immediate),
    OpcodeSpec::new(0xCA, *b"DEX", Implied),
    OpcodeSpec::new(0xCC, *b"CPY", Absolute),
    OpcodeSpec::new(0xCD, *b"CMP", Absolute),
    OpcodeSpec::new(0xCE, *b"DEC", Absolute),
    OpcodeSpec::new(0xD0, *b"BNE", Relative),
    OpcodeSpec::new(0xD1, *b"CMP", IndirectY),
    OpcodeSpec::new(0xD5, *b"CMP", ZeroPageX),
    OpcodeSpec::new(0xD6, *b"DEC", ZeroPageX),
    OpcodeSpec::new(0xD8, *b"CLD", Implied),
    OpcodeSpec::new(0xD9, *b"CMP", AbsoluteY),
    OpcodeSpec::new(0xDD, *b"CMP", AbsoluteX),
    OpcodeSpec::new(0xDE, *b"DEC", AbsoluteX),
    OpcodeSpec::new(0xE0, *b"CPX", Immediate),
    OpcodeSpec::new(0xE1, *b"SBC", IndirectX),
    OpcodeSpec::new(0xE4, *b"CPX", ZeroPage),
    OpcodeSpec::new(0xE5, *b"SBC", ZeroPage),
    OpcodeSpec::new(0xE6, *b"INC", ZeroPage),
    OpcodeSpec::new(0xE8, *b"INX", Implied),
    OpcodeSpec::new(0xE9, *b"SBC", Immediate),
    OpcodeSpec::new(0xEA, *b"NOP", Implied),
    OpcodeSpec::new(0xEC, *b"CPX", Absolute),
    OpcodeSpec::new(0xED, *b"SBC", Absolute),
    OpcodeSpec::new(0xEE, *b"INC", Absolute),
    OpcodeSpec::new(0xF0, *b"BEQ", Relative),
    OpcodeSpec::new(0xF1, *b"SBC", IndirectY),
    OpcodeSpec::new(0xF5, *b"SBC", ZeroPageX),
    OpcodeSpec::new(0xF6, *b"INC", ZeroPageX),
    OpcodeSpec::new(0xF8, *b"SED", Implied),
    OpcodeSpec::new(0xF9, *b"SBC", AbsoluteY),
    OpcodeSpec::new(0xFD, *b"SBC", AbsoluteX),
    OpcodeSpec::new(0xFE, *b"INC", AbsoluteX),
];
