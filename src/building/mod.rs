pub mod make_fakedata_lib;
