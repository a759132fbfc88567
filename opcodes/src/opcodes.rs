#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Opcode {
    NOP = 0,
    LD_BC_D16 = 1,
    LD_IND_BC_A = 2,
    INC_BC = 3,
    INC_B = 4,
    DEC_B = 5,
    LD_B_D8 = 6,
    RLCA = 7,
    LD_IND_A16_SP = 8,
    ADD_HL_BC = 9,
    LD_A_IND_BC = 10,
    DEC_BC = 11,
    INC_C = 12,
    DEC_C = 13,
    LD_C_D8 = 14,
    RRCA = 15,
    STOP_0 = 16,
    LD_DE_D16 = 17,
    LD_IND_DE_A = 18,
    INC_DE = 19,
    INC_D = 20,
    DEC_D = 21,
    LD_D_D8 = 22,
    RLA = 23,
    JR_R8 = 24,
    ADD_HL_DE = 25,
    LD_A_IND_DE = 26,
    DEC_DE = 27,
    INC_E = 28,
    DEC_E = 29,
    LD_E_D8 = 30,
    RRA = 31,
    JR_NZ_R8 = 32,
    LD_HL_D16 = 33,
    LD_IND_HL_PLUS__A = 34,
    INC_HL = 35,
    INC_H = 36,
    DEC_H = 37,
    LD_H_D8 = 38,
    DAA = 39,
    JR_Z_R8 = 40,
    ADD_HL_HL = 41,
    LD_A_IND_HL_PLUS_ = 42,
    DEC_HL = 43,
    INC_L = 44,
    DEC_L = 45,
    LD_L_D8 = 46,
    CPL = 47,
    JR_NC_R8 = 48,
    LD_SP_D16 = 49,
    LD_IND_HL_MINUS__A = 50,
    INC_SP = 51,
    INC_IND_HL = 52,
    DEC_IND_HL = 53,
    LD_IND_HL_D8 = 54,
    SCF = 55,
    JR_C_R8 = 56,
    ADD_HL_SP = 57,
    LD_A_IND_HL_MINUS_ = 58,
    DEC_SP = 59,
    INC_A = 60,
    DEC_A = 61,
    LD_A_D8 = 62,
    CCF = 63,
    LD_B_B = 64,
    LD_B_C = 65,
    LD_B_D = 66,
    LD_B_E = 67,
    LD_B_H = 68,
    LD_B_L = 69,
    LD_B_IND_HL = 70,
    LD_B_A = 71,
    LD_C_B = 72,
    LD_C_C = 73,
    LD_C_D = 74,
    LD_C_E = 75,
    LD_C_H = 76,
    LD_C_L = 77,
    LD_C_IND_HL = 78,
    LD_C_A = 79,
    LD_D_B = 80,
    LD_D_C = 81,
    LD_D_D = 82,
    LD_D_E = 83,
    LD_D_H = 84,
    LD_D_L = 85,
    LD_D_IND_HL = 86,
    LD_D_A = 87,
    LD_E_B = 88,
    LD_E_C = 89,
    LD_E_D = 90,
    LD_E_E = 91,
    LD_E_H = 92,
    LD_E_L = 93,
    LD_E_IND_HL = 94,
    LD_E_A = 95,
    LD_H_B = 96,
    LD_H_C = 97,
    LD_H_D = 98,
    LD_H_E = 99,
    LD_H_H = 100,
    LD_H_L = 101,
    LD_H_IND_HL = 102,
    LD_H_A = 103,
    LD_L_B = 104,
    LD_L_C = 105,
    LD_L_D = 106,
    LD_L_E = 107,
    LD_L_H = 108,
    LD_L_L = 109,
    LD_L_IND_HL = 110,
    LD_L_A = 111,
    LD_IND_HL_B = 112,
    LD_IND_HL_C = 113,
    LD_IND_HL_D = 114,
    LD_IND_HL_E = 115,
    LD_IND_HL_H = 116,
    LD_IND_HL_L = 117,
    HALT = 118,
    LD_IND_HL_A = 119,
    LD_A_B = 120,
    LD_A_C = 121,
    LD_A_D = 122,
    LD_A_E = 123,
    LD_A_H = 124,
    LD_A_L = 125,
    LD_A_IND_HL = 126,
    LD_A_A = 127,
    ADD_A_B = 128,
    ADD_A_C = 129,
    ADD_A_D = 130,
    ADD_A_E = 131,
    ADD_A_H = 132,
    ADD_A_L = 133,
    ADD_A_IND_HL = 134,
    ADD_A_A = 135,
    ADC_A_B = 136,
    ADC_A_C = 137,
    ADC_A_D = 138,
    ADC_A_E = 139,
    ADC_A_H = 140,
    ADC_A_L = 141,
    ADC_A_IND_HL = 142,
    ADC_A_A = 143,
    SUB_B = 144,
    SUB_C = 145,
    SUB_D = 146,
    SUB_E = 147,
    SUB_H = 148,
    SUB_L = 149,
    SUB_IND_HL = 150,
    SUB_A = 151,
    SBC_A_B = 152,
    SBC_A_C = 153,
    SBC_A_D = 154,
    SBC_A_E = 155,
    SBC_A_H = 156,
    SBC_A_L = 157,
    SBC_A_IND_HL = 158,
    SBC_A_A = 159,
    AND_B = 160,
    AND_C = 161,
    AND_D = 162,
    AND_E = 163,
    AND_H = 164,
    AND_L = 165,
    AND_IND_HL = 166,
    AND_A = 167,
    XOR_B = 168,
    XOR_C = 169,
    XOR_D = 170,
    XOR_E = 171,
    XOR_H = 172,
    XOR_L = 173,
    XOR_IND_HL = 174,
    XOR_A = 175,
    OR_B = 176,
    OR_C = 177,
    OR_D = 178,
    OR_E = 179,
    OR_H = 180,
    OR_L = 181,
    OR_IND_HL = 182,
    OR_A = 183,
    CP_B = 184,
    CP_C = 185,
    CP_D = 186,
    CP_E = 187,
    CP_H = 188,
    CP_L = 189,
    CP_IND_HL = 190,
    CP_A = 191,
    RET_NZ = 192,
    POP_BC = 193,
    JP_NZ_A16 = 194,
    JP_A16 = 195,
    CALL_NZ_A16 = 196,
    PUSH_BC = 197,
    ADD_A_D8 = 198,
    RST_00H = 199,
    RET_Z = 200,
    RET = 201,
    JP_Z_A16 = 202,
    PREFIX_CB = 203,
    CALL_Z_A16 = 204,
    CALL_A16 = 205,
    ADC_A_D8 = 206,
    RST_08H = 207,
    RET_NC = 208,
    POP_DE = 209,
    JP_NC_A16 = 210,
    ILLEGAL_D3 = 211,
    CALL_NC_A16 = 212,
    PUSH_DE = 213,
    SUB_D8 = 214,
    RST_10H = 215,
    RET_C = 216,
    RETI = 217,
    JP_C_A16 = 218,
    ILLEGAL_DB = 219,
    CALL_C_A16 = 220,
    ILLEGAL_DD = 221,
    SBC_A_D8 = 222,
    RST_18H = 223,
    LDH_IND_A8_A = 224,
    POP_HL = 225,
    LD_IND_C_A = 226,
    ILLEGAL_E3 = 227,
    ILLEGAL_E4 = 228,
    PUSH_HL = 229,
    AND_D8 = 230,
    RST_20H = 231,
    ADD_SP_R8 = 232,
    JP_IND_HL = 233,
    LD_IND_A16_A = 234,
    ILLEGAL_EB = 235,
    ILLEGAL_EC = 236,
    ILLEGAL_ED = 237,
    XOR_D8 = 238,
    RST_28H = 239,
    LDH_A_IND_A8 = 240,
    POP_AF = 241,
    LD_A_IND_C = 242,
    DI = 243,
    ILLEGAL_F4 = 244,
    PUSH_AF = 245,
    OR_D8 = 246,
    RST_30H = 247,
    LD_HL_SP_PLUS_R8 = 248,
    LD_SP_HL = 249,
    LD_A_IND_A16 = 250,
    EI = 251,
    ILLEGAL_FC = 252,
    ILLEGAL_FD = 253,
    CP_D8 = 254,
    RST_38H = 255,
}

impl From<u8> for Opcode {
    fn from(opcode: u8) -> Self {
        match opcode {
            0 => Self::NOP,
            1 => Self::LD_BC_D16,
            2 => Self::LD_IND_BC_A,
            3 => Self::INC_BC,
            4 => Self::INC_B,
            5 => Self::DEC_B,
            6 => Self::LD_B_D8,
            7 => Self::RLCA,
            8 => Self::LD_IND_A16_SP,
            9 => Self::ADD_HL_BC,
            10 => Self::LD_A_IND_BC,
            11 => Self::DEC_BC,
            12 => Self::INC_C,
            13 => Self::DEC_C,
            14 => Self::LD_C_D8,
            15 => Self::RRCA,
            16 => Self::STOP_0,
            17 => Self::LD_DE_D16,
            18 => Self::LD_IND_DE_A,
            19 => Self::INC_DE,
            20 => Self::INC_D,
            21 => Self::DEC_D,
            22 => Self::LD_D_D8,
            23 => Self::RLA,
            24 => Self::JR_R8,
            25 => Self::ADD_HL_DE,
            26 => Self::LD_A_IND_DE,
            27 => Self::DEC_DE,
            28 => Self::INC_E,
            29 => Self::DEC_E,
            30 => Self::LD_E_D8,
            31 => Self::RRA,
            32 => Self::JR_NZ_R8,
            33 => Self::LD_HL_D16,
            34 => Self::LD_IND_HL_PLUS__A,
            35 => Self::INC_HL,
            36 => Self::INC_H,
            37 => Self::DEC_H,
            38 => Self::LD_H_D8,
            39 => Self::DAA,
            40 => Self::JR_Z_R8,
            41 => Self::ADD_HL_HL,
            42 => Self::LD_A_IND_HL_PLUS_,
            43 => Self::DEC_HL,
            44 => Self::INC_L,
            45 => Self::DEC_L,
            46 => Self::LD_L_D8,
            47 => Self::CPL,
            48 => Self::JR_NC_R8,
            49 => Self::LD_SP_D16,
            50 => Self::LD_IND_HL_MINUS__A,
            51 => Self::INC_SP,
            52 => Self::INC_IND_HL,
            53 => Self::DEC_IND_HL,
            54 => Self::LD_IND_HL_D8,
            55 => Self::SCF,
            56 => Self::JR_C_R8,
            57 => Self::ADD_HL_SP,
            58 => Self::LD_A_IND_HL_MINUS_,
            59 => Self::DEC_SP,
            60 => Self::INC_A,
            61 => Self::DEC_A,
            62 => Self::LD_A_D8,
            63 => Self::CCF,
            64 => Self::LD_B_B,
            65 => Self::LD_B_C,
            66 => Self::LD_B_D,
            67 => Self::LD_B_E,
            68 => Self::LD_B_H,
            69 => Self::LD_B_L,
            70 => Self::LD_B_IND_HL,
            71 => Self::LD_B_A,
            72 => Self::LD_C_B,
            73 => Self::LD_C_C,
            74 => Self::LD_C_D,
            75 => Self::LD_C_E,
            76 => Self::LD_C_H,
            77 => Self::LD_C_L,
            78 => Self::LD_C_IND_HL,
            79 => Self::LD_C_A,
            80 => Self::LD_D_B,
            81 => Self::LD_D_C,
            82 => Self::LD_D_D,
            83 => Self::LD_D_E,
            84 => Self::LD_D_H,
            85 => Self::LD_D_L,
            86 => Self::LD_D_IND_HL,
            87 => Self::LD_D_A,
            88 => Self::LD_E_B,
            89 => Self::LD_E_C,
            90 => Self::LD_E_D,
            91 => Self::LD_E_E,
            92 => Self::LD_E_H,
            93 => Self::LD_E_L,
            94 => Self::LD_E_IND_HL,
            95 => Self::LD_E_A,
            96 => Self::LD_H_B,
            97 => Self::LD_H_C,
            98 => Self::LD_H_D,
            99 => Self::LD_H_E,
            100 => Self::LD_H_H,
            101 => Self::LD_H_L,
            102 => Self::LD_H_IND_HL,
            103 => Self::LD_H_A,
            104 => Self::LD_L_B,
            105 => Self::LD_L_C,
            106 => Self::LD_L_D,
            107 => Self::LD_L_E,
            108 => Self::LD_L_H,
            109 => Self::LD_L_L,
            110 => Self::LD_L_IND_HL,
            111 => Self::LD_L_A,
            112 => Self::LD_IND_HL_B,
            113 => Self::LD_IND_HL_C,
            114 => Self::LD_IND_HL_D,
            115 => Self::LD_IND_HL_E,
            116 => Self::LD_IND_HL_H,
            117 => Self::LD_IND_HL_L,
            118 => Self::HALT,
            119 => Self::LD_IND_HL_A,
            120 => Self::LD_A_B,
            121 => Self::LD_A_C,
            122 => Self::LD_A_D,
            123 => Self::LD_A_E,
            124 => Self::LD_A_H,
            125 => Self::LD_A_L,
            126 => Self::LD_A_IND_HL,
            127 => Self::LD_A_A,
            128 => Self::ADD_A_B,
            129 => Self::ADD_A_C,
            130 => Self::ADD_A_D,
            131 => Self::ADD_A_E,
            132 => Self::ADD_A_H,
            133 => Self::ADD_A_L,
            134 => Self::ADD_A_IND_HL,
            135 => Self::ADD_A_A,
            136 => Self::ADC_A_B,
            137 => Self::ADC_A_C,
            138 => Self::ADC_A_D,
            139 => Self::ADC_A_E,
            140 => Self::ADC_A_H,
            141 => Self::ADC_A_L,
            142 => Self::ADC_A_IND_HL,
            143 => Self::ADC_A_A,
            144 => Self::SUB_B,
            145 => Self::SUB_C,
            146 => Self::SUB_D,
            147 => Self::SUB_E,
            148 => Self::SUB_H,
            149 => Self::SUB_L,
            150 => Self::SUB_IND_HL,
            151 => Self::SUB_A,
            152 => Self::SBC_A_B,
            153 => Self::SBC_A_C,
            154 => Self::SBC_A_D,
            155 => Self::SBC_A_E,
            156 => Self::SBC_A_H,
            157 => Self::SBC_A_L,
            158 => Self::SBC_A_IND_HL,
            159 => Self::SBC_A_A,
            160 => Self::AND_B,
            161 => Self::AND_C,
            162 => Self::AND_D,
            163 => Self::AND_E,
            164 => Self::AND_H,
            165 => Self::AND_L,
            166 => Self::AND_IND_HL,
            167 => Self::AND_A,
            168 => Self::XOR_B,
            169 => Self::XOR_C,
            170 => Self::XOR_D,
            171 => Self::XOR_E,
            172 => Self::XOR_H,
            173 => Self::XOR_L,
            174 => Self::XOR_IND_HL,
            175 => Self::XOR_A,
            176 => Self::OR_B,
            177 => Self::OR_C,
            178 => Self::OR_D,
            179 => Self::OR_E,
            180 => Self::OR_H,
            181 => Self::OR_L,
            182 => Self::OR_IND_HL,
            183 => Self::OR_A,
            184 => Self::CP_B,
            185 => Self::CP_C,
            186 => Self::CP_D,
            187 => Self::CP_E,
            188 => Self::CP_H,
            189 => Self::CP_L,
            190 => Self::CP_IND_HL,
            191 => Self::CP_A,
            192 => Self::RET_NZ,
            193 => Self::POP_BC,
            194 => Self::JP_NZ_A16,
            195 => Self::JP_A16,
            196 => Self::CALL_NZ_A16,
            197 => Self::PUSH_BC,
            198 => Self::ADD_A_D8,
            199 => Self::RST_00H,
            200 => Self::RET_Z,
            201 => Self::RET,
            202 => Self::JP_Z_A16,
            203 => Self::PREFIX_CB,
            204 => Self::CALL_Z_A16,
            205 => Self::CALL_A16,
            206 => Self::ADC_A_D8,
            207 => Self::RST_08H,
            208 => Self::RET_NC,
            209 => Self::POP_DE,
            210 => Self::JP_NC_A16,
            211 => Self::ILLEGAL_D3,
            212 => Self::CALL_NC_A16,
            213 => Self::PUSH_DE,
            214 => Self::SUB_D8,
            215 => Self::RST_10H,
            216 => Self::RET_C,
            217 => Self::RETI,
            218 => Self::JP_C_A16,
            219 => Self::ILLEGAL_DB,
            220 => Self::CALL_C_A16,
            221 => Self::ILLEGAL_DD,
            222 => Self::SBC_A_D8,
            223 => Self::RST_18H,
            224 => Self::LDH_IND_A8_A,
            225 => Self::POP_HL,
            226 => Self::LD_IND_C_A,
            227 => Self::ILLEGAL_E3,
            228 => Self::ILLEGAL_E4,
            229 => Self::PUSH_HL,
            230 => Self::AND_D8,
            231 => Self::RST_20H,
            232 => Self::ADD_SP_R8,
            233 => Self::JP_IND_HL,
            234 => Self::LD_IND_A16_A,
            235 => Self::ILLEGAL_EB,
            236 => Self::ILLEGAL_EC,
            237 => Self::ILLEGAL_ED,
            238 => Self::XOR_D8,
            239 => Self::RST_28H,
            240 => Self::LDH_A_IND_A8,
            241 => Self::POP_AF,
            242 => Self::LD_A_IND_C,
            243 => Self::DI,
            244 => Self::ILLEGAL_F4,
            245 => Self::PUSH_AF,
            246 => Self::OR_D8,
            247 => Self::RST_30H,
            248 => Self::LD_HL_SP_PLUS_R8,
            249 => Self::LD_SP_HL,
            250 => Self::LD_A_IND_A16,
            251 => Self::EI,
            252 => Self::ILLEGAL_FC,
            253 => Self::ILLEGAL_FD,
            254 => Self::CP_D8,
            255 => Self::RST_38H,
        }
    }
}

impl Opcode {
    /// The opcode's mnemonic, as assembled source would spell it (e.g. `"LD BC,d16"`).
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::NOP => "NOP",
                Self::LD_BC_D16 => "LD BC,d16",
                Self::LD_IND_BC_A => "LD (BC),A",
                Self::INC_BC => "INC BC",
                Self::INC_B => "INC B",
                Self::DEC_B => "DEC B",
                Self::LD_B_D8 => "LD B,d8",
                Self::RLCA => "RLCA",
                Self::LD_IND_A16_SP => "LD (a16),SP",
                Self::ADD_HL_BC => "ADD HL,BC",
                Self::LD_A_IND_BC => "LD A,(BC)",
                Self::DEC_BC => "DEC BC",
                Self::INC_C => "INC C",
                Self::DEC_C => "DEC C",
                Self::LD_C_D8 => "LD C,d8",
                Self::RRCA => "RRCA",
                Self::STOP_0 => "STOP 0",
                Self::LD_DE_D16 => "LD DE,d16",
                Self::LD_IND_DE_A => "LD (DE),A",
                Self::INC_DE => "INC DE",
                Self::INC_D => "INC D",
                Self::DEC_D => "DEC D",
                Self::LD_D_D8 => "LD D,d8",
                Self::RLA => "RLA",
                Self::JR_R8 => "JR r8",
                Self::ADD_HL_DE => "ADD HL,DE",
                Self::LD_A_IND_DE => "LD A,(DE)",
                Self::DEC_DE => "DEC DE",
                Self::INC_E => "INC E",
                Self::DEC_E => "DEC E",
                Self::LD_E_D8 => "LD E,d8",
                Self::RRA => "RRA",
                Self::JR_NZ_R8 => "JR NZ,r8",
                Self::LD_HL_D16 => "LD HL,d16",
                Self::LD_IND_HL_PLUS__A => "LD (HL+),A",
                Self::INC_HL => "INC HL",
                Self::INC_H => "INC H",
                Self::DEC_H => "DEC H",
                Self::LD_H_D8 => "LD H,d8",
                Self::DAA => "DAA",
                Self::JR_Z_R8 => "JR Z,r8",
                Self::ADD_HL_HL => "ADD HL,HL",
                Self::LD_A_IND_HL_PLUS_ => "LD A,(HL+)",
                Self::DEC_HL => "DEC HL",
                Self::INC_L => "INC L",
                Self::DEC_L => "DEC L",
                Self::LD_L_D8 => "LD L,d8",
                Self::CPL => "CPL",
                Self::JR_NC_R8 => "JR NC,r8",
                Self::LD_SP_D16 => "LD SP,d16",
                Self::LD_IND_HL_MINUS__A => "LD (HL-),A",
                Self::INC_SP => "INC SP",
                Self::INC_IND_HL => "INC (HL)",
                Self::DEC_IND_HL => "DEC (HL)",
                Self::LD_IND_HL_D8 => "LD (HL),d8",
                Self::SCF => "SCF",
                Self::JR_C_R8 => "JR C,r8",
                Self::ADD_HL_SP => "ADD HL,SP",
                Self::LD_A_IND_HL_MINUS_ => "LD A,(HL-)",
                Self::DEC_SP => "DEC SP",
                Self::INC_A => "INC A",
                Self::DEC_A => "DEC A",
                Self::LD_A_D8 => "LD A,d8",
                Self::CCF => "CCF",
                Self::LD_B_B => "LD B,B",
                Self::LD_B_C => "LD B,C",
                Self::LD_B_D => "LD B,D",
                Self::LD_B_E => "LD B,E",
                Self::LD_B_H => "LD B,H",
                Self::LD_B_L => "LD B,L",
                Self::LD_B_IND_HL => "LD B,(HL)",
                Self::LD_B_A => "LD B,A",
                Self::LD_C_B => "LD C,B",
                Self::LD_C_C => "LD C,C",
                Self::LD_C_D => "LD C,D",
                Self::LD_C_E => "LD C,E",
                Self::LD_C_H => "LD C,H",
                Self::LD_C_L => "LD C,L",
                Self::LD_C_IND_HL => "LD C,(HL)",
                Self::LD_C_A => "LD C,A",
                Self::LD_D_B => "LD D,B",
                Self::LD_D_C => "LD D,C",
                Self::LD_D_D => "LD D,D",
                Self::LD_D_E => "LD D,E",
                Self::LD_D_H => "LD D,H",
                Self::LD_D_L => "LD D,L",
                Self::LD_D_IND_HL => "LD D,(HL)",
                Self::LD_D_A => "LD D,A",
                Self::LD_E_B => "LD E,B",
                Self::LD_E_C => "LD E,C",
                Self::LD_E_D => "LD E,D",
                Self::LD_E_E => "LD E,E",
                Self::LD_E_H => "LD E,H",
                Self::LD_E_L => "LD E,L",
                Self::LD_E_IND_HL => "LD E,(HL)",
                Self::LD_E_A => "LD E,A",
                Self::LD_H_B => "LD H,B",
                Self::LD_H_C => "LD H,C",
                Self::LD_H_D => "LD H,D",
                Self::LD_H_E => "LD H,E",
                Self::LD_H_H => "LD H,H",
                Self::LD_H_L => "LD H,L",
                Self::LD_H_IND_HL => "LD H,(HL)",
                Self::LD_H_A => "LD H,A",
                Self::LD_L_B => "LD L,B",
                Self::LD_L_C => "LD L,C",
                Self::LD_L_D => "LD L,D",
                Self::LD_L_E => "LD L,E",
                Self::LD_L_H => "LD L,H",
                Self::LD_L_L => "LD L,L",
                Self::LD_L_IND_HL => "LD L,(HL)",
                Self::LD_L_A => "LD L,A",
                Self::LD_IND_HL_B => "LD (HL),B",
                Self::LD_IND_HL_C => "LD (HL),C",
                Self::LD_IND_HL_D => "LD (HL),D",
                Self::LD_IND_HL_E => "LD (HL),E",
                Self::LD_IND_HL_H => "LD (HL),H",
                Self::LD_IND_HL_L => "LD (HL),L",
                Self::HALT => "HALT",
                Self::LD_IND_HL_A => "LD (HL),A",
                Self::LD_A_B => "LD A,B",
                Self::LD_A_C => "LD A,C",
                Self::LD_A_D => "LD A,D",
                Self::LD_A_E => "LD A,E",
                Self::LD_A_H => "LD A,H",
                Self::LD_A_L => "LD A,L",
                Self::LD_A_IND_HL => "LD A,(HL)",
                Self::LD_A_A => "LD A,A",
                Self::ADD_A_B => "ADD A,B",
                Self::ADD_A_C => "ADD A,C",
                Self::ADD_A_D => "ADD A,D",
                Self::ADD_A_E => "ADD A,E",
                Self::ADD_A_H => "ADD A,H",
                Self::ADD_A_L => "ADD A,L",
                Self::ADD_A_IND_HL => "ADD A,(HL)",
                Self::ADD_A_A => "ADD A,A",
                Self::ADC_A_B => "ADC A,B",
                Self::ADC_A_C => "ADC A,C",
                Self::ADC_A_D => "ADC A,D",
                Self::ADC_A_E => "ADC A,E",
                Self::ADC_A_H => "ADC A,H",
                Self::ADC_A_L => "ADC A,L",
                Self::ADC_A_IND_HL => "ADC A,(HL)",
                Self::ADC_A_A => "ADC A,A",
                Self::SUB_B => "SUB B",
                Self::SUB_C => "SUB C",
                Self::SUB_D => "SUB D",
                Self::SUB_E => "SUB E",
                Self::SUB_H => "SUB H",
                Self::SUB_L => "SUB L",
                Self::SUB_IND_HL => "SUB (HL)",
                Self::SUB_A => "SUB A",
                Self::SBC_A_B => "SBC A,B",
                Self::SBC_A_C => "SBC A,C",
                Self::SBC_A_D => "SBC A,D",
                Self::SBC_A_E => "SBC A,E",
                Self::SBC_A_H => "SBC A,H",
                Self::SBC_A_L => "SBC A,L",
                Self::SBC_A_IND_HL => "SBC A,(HL)",
                Self::SBC_A_A => "SBC A,A",
                Self::AND_B => "AND B",
                Self::AND_C => "AND C",
                Self::AND_D => "AND D",
                Self::AND_E => "AND E",
                Self::AND_H => "AND H",
                Self::AND_L => "AND L",
                Self::AND_IND_HL => "AND (HL)",
                Self::AND_A => "AND A",
                Self::XOR_B => "XOR B",
                Self::XOR_C => "XOR C",
                Self::XOR_D => "XOR D",
                Self::XOR_E => "XOR E",
                Self::XOR_H => "XOR H",
                Self::XOR_L => "XOR L",
                Self::XOR_IND_HL => "XOR (HL)",
                Self::XOR_A => "XOR A",
                Self::OR_B => "OR B",
                Self::OR_C => "OR C",
                Self::OR_D => "OR D",
                Self::OR_E => "OR E",
                Self::OR_H => "OR H",
                Self::OR_L => "OR L",
                Self::OR_IND_HL => "OR (HL)",
                Self::OR_A => "OR A",
                Self::CP_B => "CP B",
                Self::CP_C => "CP C",
                Self::CP_D => "CP D",
                Self::CP_E => "CP E",
                Self::CP_H => "CP H",
                Self::CP_L => "CP L",
                Self::CP_IND_HL => "CP (HL)",
                Self::CP_A => "CP A",
                Self::RET_NZ => "RET NZ",
                Self::POP_BC => "POP BC",
                Self::JP_NZ_A16 => "JP NZ,a16",
                Self::JP_A16 => "JP a16",
                Self::CALL_NZ_A16 => "CALL NZ,a16",
                Self::PUSH_BC => "PUSH BC",
                Self::ADD_A_D8 => "ADD A,d8",
                Self::RST_00H => "RST 00H",
                Self::RET_Z => "RET Z",
                Self::RET => "RET",
                Self::JP_Z_A16 => "JP Z,a16",
                Self::PREFIX_CB => "PREFIX CB",
                Self::CALL_Z_A16 => "CALL Z,a16",
                Self::CALL_A16 => "CALL a16",
                Self::ADC_A_D8 => "ADC A,d8",
                Self::RST_08H => "RST 08H",
                Self::RET_NC => "RET NC",
                Self::POP_DE => "POP DE",
                Self::JP_NC_A16 => "JP NC,a16",
                Self::ILLEGAL_D3 => "ILLEGAL_D3",
                Self::CALL_NC_A16 => "CALL NC,a16",
                Self::PUSH_DE => "PUSH DE",
                Self::SUB_D8 => "SUB d8",
                Self::RST_10H => "RST 10H",
                Self::RET_C => "RET C",
                Self::RETI => "RETI",
                Self::JP_C_A16 => "JP C,a16",
                Self::ILLEGAL_DB => "ILLEGAL_DB",
                Self::CALL_C_A16 => "CALL C,a16",
                Self::ILLEGAL_DD => "ILLEGAL_DD",
                Self::SBC_A_D8 => "SBC A,d8",
                Self::RST_18H => "RST 18H",
                Self::LDH_IND_A8_A => "LDH (a8),A",
                Self::POP_HL => "POP HL",
                Self::LD_IND_C_A => "LD (C),A",
                Self::ILLEGAL_E3 => "ILLEGAL_E3",
                Self::ILLEGAL_E4 => "ILLEGAL_E4",
                Self::PUSH_HL => "PUSH HL",
                Self::AND_D8 => "AND d8",
                Self::RST_20H => "RST 20H",
                Self::ADD_SP_R8 => "ADD SP,r8",
                Self::JP_IND_HL => "JP (HL)",
                Self::LD_IND_A16_A => "LD (a16),A",
                Self::ILLEGAL_EB => "ILLEGAL_EB",
                Self::ILLEGAL_EC => "ILLEGAL_EC",
                Self::ILLEGAL_ED => "ILLEGAL_ED",
                Self::XOR_D8 => "XOR d8",
                Self::RST_28H => "RST 28H",
                Self::LDH_A_IND_A8 => "LDH A,(a8)",
                Self::POP_AF => "POP AF",
                Self::LD_A_IND_C => "LD A,(C)",
                Self::DI => "DI",
                Self::ILLEGAL_F4 => "ILLEGAL_F4",
                Self::PUSH_AF => "PUSH AF",
                Self::OR_D8 => "OR d8",
                Self::RST_30H => "RST 30H",
                Self::LD_HL_SP_PLUS_R8 => "LD HL,SP+r8",
                Self::LD_SP_HL => "LD SP,HL",
                Self::LD_A_IND_A16 => "LD A,(a16)",
                Self::EI => "EI",
                Self::ILLEGAL_FC => "ILLEGAL_FC",
                Self::ILLEGAL_FD => "ILLEGAL_FD",
                Self::CP_D8 => "CP d8",
                Self::RST_38H => "RST 38H",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
