/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_unsigned_cell!(Cell8, u8, cell8_tests);
test_unsigned_cell!(Cell16, u16, cell16_tests);
test_unsigned_cell!(Cell32, u32, cell32_tests);
test_unsigned_cell!(Cell64, u64, cell64_tests);
