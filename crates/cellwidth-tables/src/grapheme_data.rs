// Generated by tools/gen_tables.py. Do not edit by hand.

/// Grapheme_Cluster_Break=Extend codepoints.
pub static GRAPHEME_EXTEND: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00489), (0x00591, 0x005BD), (0x005BF, 0x005BF),
    (0x005C1, 0x005C2), (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00610, 0x0061A),
    (0x0064B, 0x0065F), (0x00670, 0x00670), (0x006D6, 0x006DC), (0x006DF, 0x006E4),
    (0x006E7, 0x006E8), (0x006EA, 0x006ED), (0x00711, 0x00711), (0x00730, 0x0074A),
    (0x007A6, 0x007B0), (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00816, 0x00819),
    (0x0081B, 0x00823), (0x00825, 0x00827), (0x00829, 0x0082D), (0x00859, 0x0085B),
    (0x00897, 0x0089F), (0x008CA, 0x008E1), (0x008E3, 0x00902), (0x0093A, 0x0093A),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D), (0x00951, 0x00957),
    (0x00962, 0x00963), (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009BE, 0x009BE),
    (0x009C1, 0x009C4), (0x009CD, 0x009CD), (0x009D7, 0x009D7), (0x009E2, 0x009E3),
    (0x009FE, 0x009FE), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C), (0x00A41, 0x00A42),
    (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5),
    (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00AFA, 0x00AFF),
    (0x00B01, 0x00B01), (0x00B3C, 0x00B3C), (0x00B3E, 0x00B3F), (0x00B41, 0x00B44),
    (0x00B4D, 0x00B4D), (0x00B55, 0x00B57), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BBE, 0x00BBE), (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00BD7, 0x00BD7),
    (0x00C00, 0x00C00), (0x00C04, 0x00C04), (0x00C3C, 0x00C3C), (0x00C3E, 0x00C40),
    (0x00C46, 0x00C48), (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C62, 0x00C63),
    (0x00C81, 0x00C81), (0x00CBC, 0x00CBC), (0x00CBF, 0x00CC0), (0x00CC2, 0x00CC2),
    (0x00CC6, 0x00CC8), (0x00CCA, 0x00CCD), (0x00CD5, 0x00CD6), (0x00CE2, 0x00CE3),
    (0x00D00, 0x00D01), (0x00D3B, 0x00D3C), (0x00D3E, 0x00D3E), (0x00D41, 0x00D44),
    (0x00D4D, 0x00D4D), (0x00D57, 0x00D57), (0x00D62, 0x00D63), (0x00D81, 0x00D81),
    (0x00DCA, 0x00DCA), (0x00DCF, 0x00DCF), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00DDF, 0x00DDF), (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECE), (0x00F18, 0x00F19),
    (0x00F35, 0x00F35), (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01037), (0x01039, 0x0103A),
    (0x0103D, 0x0103E), (0x01058, 0x01059), (0x0105E, 0x01060), (0x01071, 0x01074),
    (0x01082, 0x01082), (0x01085, 0x01086), (0x0108D, 0x0108D), (0x0109D, 0x0109D),
    (0x0135D, 0x0135F), (0x01712, 0x01715), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D), (0x0180F, 0x0180F),
    (0x01885, 0x01886), (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18), (0x01A1B, 0x01A1B),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60), (0x01A62, 0x01A62),
    (0x01A65, 0x01A6C), (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01AB0, 0x01ADD),
    (0x01AE0, 0x01AEB), (0x01B00, 0x01B03), (0x01B34, 0x01B3D), (0x01B42, 0x01B44),
    (0x01B6B, 0x01B73), (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BAD),
    (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9), (0x01BED, 0x01BED), (0x01BEF, 0x01BF3),
    (0x01C2C, 0x01C33), (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4), (0x01CF8, 0x01CF9),
    (0x01DC0, 0x01DFF), (0x0200C, 0x0200C), (0x020D0, 0x020F0), (0x02CEF, 0x02CF1),
    (0x02D7F, 0x02D7F), (0x02DE0, 0x02DFF), (0x0302A, 0x0302F), (0x03099, 0x0309A),
    (0x0A66F, 0x0A672), (0x0A674, 0x0A67D), (0x0A69E, 0x0A69F), (0x0A6F0, 0x0A6F1),
    (0x0A802, 0x0A802), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B), (0x0A825, 0x0A826),
    (0x0A82C, 0x0A82C), (0x0A8C4, 0x0A8C5), (0x0A8E0, 0x0A8F1), (0x0A8FF, 0x0A8FF),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A953, 0x0A953), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B3), (0x0A9B6, 0x0A9B9), (0x0A9BC, 0x0A9BD), (0x0A9C0, 0x0A9C0),
    (0x0A9E5, 0x0A9E5), (0x0AA29, 0x0AA2E), (0x0AA31, 0x0AA32), (0x0AA35, 0x0AA36),
    (0x0AA43, 0x0AA43), (0x0AA4C, 0x0AA4C), (0x0AA7C, 0x0AA7C), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB4), (0x0AAB7, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0AAEC, 0x0AAED), (0x0AAF6, 0x0AAF6), (0x0ABE5, 0x0ABE5), (0x0ABE8, 0x0ABE8),
    (0x0ABED, 0x0ABED), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE2F),
    (0x0FF9E, 0x0FF9F), (0x101FD, 0x101FD), (0x102E0, 0x102E0), (0x10376, 0x1037A),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x10AE5, 0x10AE6), (0x10D24, 0x10D27), (0x10D69, 0x10D6D),
    (0x10EAB, 0x10EAC), (0x10EFA, 0x10EFF), (0x10F46, 0x10F50), (0x10F82, 0x10F85),
    (0x11001, 0x11001), (0x11038, 0x11046), (0x11070, 0x11070), (0x11073, 0x11074),
    (0x1107F, 0x11081), (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110C2, 0x110C2),
    (0x11100, 0x11102), (0x11127, 0x1112B), (0x1112D, 0x11134), (0x11173, 0x11173),
    (0x11180, 0x11181), (0x111B6, 0x111BE), (0x111C0, 0x111C0), (0x111C9, 0x111CC),
    (0x111CF, 0x111CF), (0x1122F, 0x11231), (0x11234, 0x11237), (0x1123E, 0x1123E),
    (0x11241, 0x11241), (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11300, 0x11301),
    (0x1133B, 0x1133C), (0x1133E, 0x1133E), (0x11340, 0x11340), (0x1134D, 0x1134D),
    (0x11357, 0x11357), (0x11366, 0x1136C), (0x11370, 0x11374), (0x113B8, 0x113B8),
    (0x113BB, 0x113C0), (0x113C2, 0x113C2), (0x113C5, 0x113C5), (0x113C7, 0x113C9),
    (0x113CE, 0x113D0), (0x113D2, 0x113D2), (0x113E1, 0x113E2), (0x11438, 0x1143F),
    (0x11442, 0x11444), (0x11446, 0x11446), (0x1145E, 0x1145E), (0x114B0, 0x114B0),
    (0x114B3, 0x114B8), (0x114BA, 0x114BA), (0x114BD, 0x114BD), (0x114BF, 0x114C0),
    (0x114C2, 0x114C3), (0x115AF, 0x115AF), (0x115B2, 0x115B5), (0x115BC, 0x115BD),
    (0x115BF, 0x115C0), (0x115DC, 0x115DD), (0x11633, 0x1163A), (0x1163D, 0x1163D),
    (0x1163F, 0x11640), (0x116AB, 0x116AB), (0x116AD, 0x116AD), (0x116B0, 0x116B7),
    (0x1171D, 0x1171D), (0x1171F, 0x1171F), (0x11722, 0x11725), (0x11727, 0x1172B),
    (0x1182F, 0x11837), (0x11839, 0x1183A), (0x11930, 0x11930), (0x1193B, 0x1193E),
    (0x11943, 0x11943), (0x119D4, 0x119D7), (0x119DA, 0x119DB), (0x119E0, 0x119E0),
    (0x11A01, 0x11A0A), (0x11A33, 0x11A38), (0x11A3B, 0x11A3E), (0x11A47, 0x11A47),
    (0x11A51, 0x11A56), (0x11A59, 0x11A5B), (0x11A8A, 0x11A96), (0x11A98, 0x11A99),
    (0x11B60, 0x11B60), (0x11B62, 0x11B64), (0x11B66, 0x11B66), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6), (0x11D31, 0x11D36), (0x11D3A, 0x11D3A),
    (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91),
    (0x11D95, 0x11D95), (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x11F00, 0x11F01),
    (0x11F36, 0x11F3A), (0x11F40, 0x11F42), (0x11F5A, 0x11F5A), (0x13440, 0x13440),
    (0x13447, 0x13455), (0x1611E, 0x16129), (0x1612D, 0x1612F), (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36), (0x16F4F, 0x16F4F), (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4),
    (0x16FF0, 0x16FF1), (0x1BC9D, 0x1BC9E), (0x1CF00, 0x1CF2D), (0x1CF30, 0x1CF46),
    (0x1D165, 0x1D169), (0x1D16D, 0x1D172), (0x1D17B, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C),
    (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E130, 0x1E136), (0x1E2AE, 0x1E2AE),
    (0x1E2EC, 0x1E2EF), (0x1E4EC, 0x1E4EF), (0x1E5EE, 0x1E5EF), (0x1E6E3, 0x1E6E3),
    (0x1E6E6, 0x1E6E6), (0x1E6EE, 0x1E6EF), (0x1E6F5, 0x1E6F5), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0x1F3FB, 0x1F3FF), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Extended_Pictographic codepoints.
pub static EXTENDED_PICTOGRAPHIC: &[(u32, u32)] = &[
    (0x000A9, 0x000A9), (0x000AE, 0x000AE), (0x0203C, 0x0203C), (0x02049, 0x02049),
    (0x02122, 0x02122), (0x02139, 0x02139), (0x02194, 0x02199), (0x021A9, 0x021AA),
    (0x0231A, 0x0231B), (0x02328, 0x02328), (0x023CF, 0x023CF), (0x023E9, 0x023F3),
    (0x023F8, 0x023FA), (0x024C2, 0x024C2), (0x025AA, 0x025AB), (0x025B6, 0x025B6),
    (0x025C0, 0x025C0), (0x025FB, 0x025FE), (0x02600, 0x02604), (0x0260E, 0x0260E),
    (0x02611, 0x02611), (0x02614, 0x02615), (0x02618, 0x02618), (0x0261D, 0x0261D),
    (0x02620, 0x02620), (0x02622, 0x02623), (0x02626, 0x02626), (0x0262A, 0x0262A),
    (0x0262E, 0x0262F), (0x02638, 0x0263A), (0x02640, 0x02640), (0x02642, 0x02642),
    (0x02648, 0x02653), (0x0265F, 0x02660), (0x02663, 0x02663), (0x02665, 0x02666),
    (0x02668, 0x02668), (0x0267B, 0x0267B), (0x0267E, 0x0267F), (0x02692, 0x02697),
    (0x02699, 0x02699), (0x0269B, 0x0269C), (0x026A0, 0x026A1), (0x026A7, 0x026A7),
    (0x026AA, 0x026AB), (0x026B0, 0x026B1), (0x026BD, 0x026BE), (0x026C4, 0x026C5),
    (0x026C8, 0x026C8), (0x026CE, 0x026CF), (0x026D1, 0x026D1), (0x026D3, 0x026D4),
    (0x026E9, 0x026EA), (0x026F0, 0x026F5), (0x026F7, 0x026FA), (0x026FD, 0x026FD),
    (0x02702, 0x02702), (0x02705, 0x02705), (0x02708, 0x0270D), (0x0270F, 0x0270F),
    (0x02712, 0x02712), (0x02714, 0x02714), (0x02716, 0x02716), (0x0271D, 0x0271D),
    (0x02721, 0x02721), (0x02728, 0x02728), (0x02733, 0x02734), (0x02744, 0x02744),
    (0x02747, 0x02747), (0x0274C, 0x0274C), (0x0274E, 0x0274E), (0x02753, 0x02755),
    (0x02757, 0x02757), (0x02763, 0x02764), (0x02795, 0x02797), (0x027A1, 0x027A1),
    (0x027B0, 0x027B0), (0x027BF, 0x027BF), (0x02934, 0x02935), (0x02B05, 0x02B07),
    (0x02B1B, 0x02B1C), (0x02B50, 0x02B50), (0x02B55, 0x02B55), (0x03030, 0x03030),
    (0x0303D, 0x0303D), (0x03297, 0x03297), (0x03299, 0x03299), (0x1F004, 0x1F004),
    (0x1F02C, 0x1F02F), (0x1F094, 0x1F09F), (0x1F0AF, 0x1F0B0), (0x1F0C0, 0x1F0C0),
    (0x1F0CF, 0x1F0D0), (0x1F0F6, 0x1F0FF), (0x1F170, 0x1F171), (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F1AE, 0x1F1E5), (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A), (0x1F22F, 0x1F22F), (0x1F232, 0x1F23A), (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F25F), (0x1F266, 0x1F321), (0x1F324, 0x1F393), (0x1F396, 0x1F397),
    (0x1F399, 0x1F39B), (0x1F39E, 0x1F3F0), (0x1F3F3, 0x1F3F5), (0x1F3F7, 0x1F3FA),
    (0x1F400, 0x1F4FD), (0x1F4FF, 0x1F53D), (0x1F549, 0x1F54E), (0x1F550, 0x1F567),
    (0x1F56F, 0x1F570), (0x1F573, 0x1F57A), (0x1F587, 0x1F587), (0x1F58A, 0x1F58D),
    (0x1F590, 0x1F590), (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A5), (0x1F5A8, 0x1F5A8),
    (0x1F5B1, 0x1F5B2), (0x1F5BC, 0x1F5BC), (0x1F5C2, 0x1F5C4), (0x1F5D1, 0x1F5D3),
    (0x1F5DC, 0x1F5DE), (0x1F5E1, 0x1F5E1), (0x1F5E3, 0x1F5E3), (0x1F5E8, 0x1F5E8),
    (0x1F5EF, 0x1F5EF), (0x1F5F3, 0x1F5F3), (0x1F5FA, 0x1F64F), (0x1F680, 0x1F6C5),
    (0x1F6CB, 0x1F6D2), (0x1F6D5, 0x1F6E5), (0x1F6E9, 0x1F6E9), (0x1F6EB, 0x1F6F0),
    (0x1F6F3, 0x1F6FF), (0x1F7DA, 0x1F7FF), (0x1F80C, 0x1F80F), (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F), (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8AF), (0x1F8BC, 0x1F8BF),
    (0x1F8C2, 0x1F8CF), (0x1F8D9, 0x1F8FF), (0x1F90C, 0x1F93A), (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF), (0x1FA58, 0x1FA5F), (0x1FA6E, 0x1FAFF), (0x1FC00, 0x1FFFD),
];
